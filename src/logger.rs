use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};

const CONFIG_FILE: &str = "log4rs.yaml";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(CONFIG_FILE, Default::default()).is_ok() {
        return;
    }
    // no usable config file in the working directory
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn));
    if let Ok(config) = config {
        let _ = log4rs::init_config(config);
    }
}

fn get_byte_array(bytes: &[u8]) -> Vec<String> {
    bytes.iter().map(|byte| format!("{:02X}", byte)).collect()
}

pub fn log_bytes(label: &str, bytes: &[u8]) {
    log::debug!("{} ({} bytes): {:?}", label, bytes.len(), get_byte_array(bytes));
}

#[cfg(test)]
mod test {
    use super::get_byte_array;

    #[test]
    fn format_bytes_as_upper_hex() {
        let formatted = get_byte_array(&[0x00, 0x0A, 0xFF]);
        assert_eq!(formatted, vec!["00", "0A", "FF"]);
    }
}
