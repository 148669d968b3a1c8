//! Resolve a caller-supplied resource into document text.

use std::path::Path;

use crate::error::ParserError;

/// Read `resource` as a file when it names one, otherwise treat it as the
/// document itself. Line endings are normalized to `\n`.
///
/// Invalid UTF-8 in files is replaced rather than rejected; scanner output
/// regularly carries banner bytes from remote services.
///
/// # Errors
/// Returns `ParserError::Io` if `resource` is a file that cannot be read.
pub fn load_resource(resource: &str) -> Result<String, ParserError> {
    let path = Path::new(resource);
    let contents = if path.is_file() {
        let bytes = std::fs::read(path)?;
        String::from_utf8_lossy(&bytes).into_owned()
    } else {
        resource.to_string()
    };
    Ok(normalize_newlines(contents))
}

fn normalize_newlines(contents: String) -> String {
    if contents.contains('\r') {
        contents.replace("\r\n", "\n")
    } else {
        contents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn literal_text_passes_through() {
        let text = "Host: 10.0.0.1 ()\tStatus: Up\n";
        assert_eq!(load_resource(text).unwrap(), text);
    }

    #[test]
    fn reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "URL_BASE: http://example.com/\r\n").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        assert_eq!(load_resource(&path).unwrap(), "URL_BASE: http://example.com/\n");
    }

    #[test]
    fn crlf_literals_are_normalized() {
        assert_eq!(load_resource("a\r\nb\r\n").unwrap(), "a\nb\n");
    }

    #[test]
    fn missing_path_is_treated_as_literal() {
        let resource = "/definitely/not/a/real/scan.xml";
        assert_eq!(load_resource(resource).unwrap(), resource);
    }
}
