//! Tests for logger installation and verbosity mapping

#[cfg(test)]
mod tests {
    use log::LevelFilter;
    use unshred::io::logger::{init_with_level, level_for};

    #[test]
    fn test_level_for_flags() {
        assert_eq!(level_for(false, false), LevelFilter::Warn);
        assert_eq!(level_for(true, false), LevelFilter::Debug);
        assert_eq!(level_for(false, true), LevelFilter::Error);
        assert_eq!(level_for(true, true), LevelFilter::Debug);
    }

    #[test]
    fn test_repeated_initialization_is_harmless() {
        assert!(init_with_level(LevelFilter::Warn).is_ok());
        assert!(init_with_level(LevelFilter::Debug).is_ok());
        log::debug!("logger installed");
    }
}
