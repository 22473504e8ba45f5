//! Tests for error types

#[cfg(test)]
mod tests {
    use crate::error::AdbxError;

    #[test]
    fn test_unknown_operation_display() {
        let err = AdbxError::UnknownOperation("teleport".to_string());
        assert!(format!("{}", err).contains("teleport"));
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = AdbxError::IndexOutOfRange {
            requested: 3,
            available: 2,
        };
        let msg = format!("{}", err);
        assert!(msg.contains('3'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_execution_failure_display() {
        let err = AdbxError::ExecutionFailure {
            status: 1,
            stderr: "error: device offline".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("status 1"));
        assert!(msg.contains("device offline"));
    }

    #[test]
    fn test_launch_error_keeps_source() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = AdbxError::Launch {
            program: "adb".to_string(),
            source: io_err,
        };
        assert!(format!("{}", err).contains("adb"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AdbxError = io_err.into();
        assert!(format!("{}", err).contains("IO error"));
    }

    #[test]
    fn test_from_string() {
        let err: AdbxError = "something went wrong".to_string().into();
        assert!(format!("{}", err).contains("something went wrong"));
    }
}
