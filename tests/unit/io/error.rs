//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use unshred::ReassemblyError;
    use unshred::algorithm::working_set::StripId;
    use unshred::io::error::{ErrorContext, WithContext, invalid_parameter};

    // Tests error source chaining for file system failures
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ReassemblyError::FileSystem {
            path: "/tmp/strips".into(),
            operation: "read directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("read directory"));
    }

    #[test]
    fn test_mismatched_height_message() {
        let error = ReassemblyError::MismatchedHeight {
            left_height: 480,
            right_height: 479,
        };

        let message = error.to_string();
        assert!(message.contains("480"));
        assert!(message.contains("479"));
        assert!(error.source().is_none());
    }

    // Tests the assembly wrapper names the pair and chains to the cause
    #[test]
    fn test_assembly_error_names_pair() {
        let error = ReassemblyError::Assembly {
            round: 2,
            current: StripId::new(4),
            candidate: StripId::new(7),
            source: Box::new(ReassemblyError::MismatchedHeight {
                left_height: 10,
                right_height: 12,
            }),
        };

        let message = error.to_string();
        assert!(message.contains("round 2"));
        assert!(message.contains("#4"));
        assert!(message.contains("#7"));
        assert!(error.source().is_some());
        assert!(error.is_mismatched_height());
        assert!(matches!(
            error.root(),
            ReassemblyError::MismatchedHeight { .. }
        ));
    }

    #[test]
    fn test_directory_not_found_message() {
        let error = ReassemblyError::DirectoryNotFound {
            path: PathBuf::from("shredded/destination"),
        };
        assert!(error.to_string().contains("shredded/destination"));
        assert!(!error.is_mismatched_height());
    }

    // Tests decode errors carry the path and the decoder's cause
    #[test]
    fn test_image_decode_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = ReassemblyError::ImageDecode {
            path: PathBuf::from("/restricted/strip.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/strip.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("strip_width", &0, &"must be at least one column");

        let message = error.to_string();
        assert!(message.contains("strip_width"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be at least one column"));
    }

    // Tests context never double-wraps an assembly error
    #[test]
    fn test_context_keeps_first_pair() {
        let inner: Result<(), ReassemblyError> = Err(ReassemblyError::MismatchedHeight {
            left_height: 1,
            right_height: 2,
        });
        let first = ErrorContext {
            round: Some(1),
            pair: Some((StripId::new(0), StripId::new(1))),
        };
        let second = ErrorContext {
            round: Some(9),
            pair: Some((StripId::new(5), StripId::new(6))),
        };

        let err = inner.with_context(first).with_context(second).unwrap_err();
        match err {
            ReassemblyError::Assembly {
                round, candidate, ..
            } => {
                assert_eq!(round, 1);
                assert_eq!(candidate, StripId::new(1));
            }
            other => unreachable!("Expected Assembly error, got {other:?}"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let error: ReassemblyError = std::io::Error::other("boom").into();
        assert!(matches!(error, ReassemblyError::FileSystem { .. }));
    }
}
