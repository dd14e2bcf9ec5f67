use anyhow::{Context, Result, bail};
use content_inspector::{ContentType, inspect};
use glob::Pattern;
use std::fs;
use std::path::Path;

/// Compile glob patterns, dropping the ones that do not parse.
pub fn compile_exclude_patterns(patterns: &[String]) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|pattern| match Pattern::new(pattern) {
            Ok(compiled) => Some(compiled),
            Err(e) => {
                log::warn!("Ignoring invalid exclude pattern {:?}: {}", pattern, e);
                None
            }
        })
        .collect()
}

/// Check if a path should be excluded based on a list of glob patterns.
pub fn is_path_excluded(path: &Path, exclude_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    exclude_patterns
        .iter()
        .any(|pattern| pattern.matches(&path_str) || pattern.matches(&file_name))
}

/// Read a text file as raw bytes.
///
/// Binary content is reported as an error so callers can skip the file.
/// Text in any ASCII-compatible encoding is accepted; callers decode it
/// lossily for matching and keep the bytes for rewriting.
pub fn read_text_file(path: &Path) -> Result<Vec<u8>> {
    let buffer = fs::read(path).with_context(|| format!("open and read {}", path.display()))?;

    let content_type = inspect(&buffer);
    if content_type.is_binary() {
        bail!("{} looks like a binary file", path.display());
    }
    if content_type != ContentType::UTF_8 && content_type != ContentType::UTF_8_BOM {
        bail!(
            "{} is not in an ASCII-compatible encoding ({:?})",
            path.display(),
            content_type
        );
    }

    Ok(buffer)
}

/// Position of `needle` in `haystack`, compared byte for byte.
pub fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_path_excluded_matches_name_and_full_path() {
        let patterns = compile_exclude_patterns(&[".git".to_string(), "*/build/*".to_string()]);

        assert!(is_path_excluded(Path::new("/repo/.git"), &patterns));
        assert!(is_path_excluded(Path::new("/repo/build/out.c"), &patterns));
        assert!(!is_path_excluded(Path::new("/repo/src/main.c"), &patterns));
    }

    #[test]
    fn test_invalid_patterns_are_dropped() {
        let patterns = compile_exclude_patterns(&["[".to_string(), "*.o".to_string()]);
        assert_eq!(patterns.len(), 1);
    }

    #[test]
    fn test_read_text_file_rejects_binary() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let text = temp_dir.path().join("a.c");
        let binary = temp_dir.path().join("a.o");
        fs::write(&text, "int x;\n").expect("Failed to write text file");
        fs::write(&binary, [0x7f, b'E', b'L', b'F', 0, 0, 1, 2]).expect("Failed to write binary");

        assert_eq!(read_text_file(&text).expect("text should load"), b"int x;\n");
        assert!(read_text_file(&binary).is_err());
        assert!(read_text_file(&temp_dir.path().join("missing.c")).is_err());
    }

    #[test]
    fn test_read_text_file_keeps_latin1_bytes() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let latin1 = temp_dir.path().join("latin1.c");
        let utf16 = temp_dir.path().join("utf16.c");
        fs::write(&latin1, b"/* J\xfcrgen */\n").expect("Failed to write Latin-1 file");
        fs::write(&utf16, [0xff, 0xfe, b'a', 0, b'\n', 0]).expect("Failed to write UTF-16 file");

        assert_eq!(
            read_text_file(&latin1).expect("Latin-1 text should load"),
            b"/* J\xfcrgen */\n"
        );
        assert!(read_text_file(&utf16).is_err());
    }

    #[test]
    fn test_find_bytes() {
        assert_eq!(find_bytes(b"# LICENSE\n", b"LICENSE"), Some(2));
        assert_eq!(find_bytes(b"# LICENS", b"LICENSE"), None);
        assert_eq!(find_bytes(b"", b"LICENSE"), None);
        assert_eq!(find_bytes(b"abc", b""), Some(0));
    }
}
