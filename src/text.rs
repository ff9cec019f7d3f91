//! Word extraction and file discovery used by the bundled programs.

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// Maximum number of characters in a single word. Longer runs are split into consecutive words.
pub const MAX_WORD_LEN: usize = 100;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '\'' || c == '_'
}

/// Reads `reader` to the end and returns the words it contains, in order. A word is a run of
/// ASCII letters, digits, apostrophes and underscores.
///
/// # Examples
///
/// ```
/// use red_black_collections::text::tokenize;
///
/// let words = tokenize("Don't buy_now, 100% FREE!".as_bytes()).unwrap();
/// assert_eq!(words, vec!["Don't", "buy_now", "100", "FREE"]);
/// ```
pub fn tokenize<R>(mut reader: R) -> io::Result<Vec<String>>
where
    R: BufRead,
{
    let mut words = Vec::new();
    let mut word = String::new();
    let mut bytes = Vec::new();

    loop {
        bytes.clear();
        if reader.read_until(b'\n', &mut bytes)? == 0 {
            break;
        }
        // invalid UTF-8 decodes to U+FFFD, which separates words
        let line = String::from_utf8_lossy(&bytes);

        for c in line.chars() {
            if is_word_char(c) {
                word.push(c);
                if word.len() == MAX_WORD_LEN {
                    words.push(word.split_off(0));
                }
            } else if !word.is_empty() {
                words.push(word.split_off(0));
            }
        }
    }

    if !word.is_empty() {
        words.push(word);
    }
    Ok(words)
}

/// Returns every path below `root` that is not a directory, sorted. Directories are walked
/// recursively; symbolic links are not followed. A `root` that is not a directory is returned
/// on its own.
pub fn find_files<P>(root: P) -> io::Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
{
    let root = root.as_ref();
    if !fs::symlink_metadata(root)?.is_dir() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                pending.push(entry.path());
            } else {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::{find_files, tokenize, MAX_WORD_LEN};
    use std::fs;

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("".as_bytes()).unwrap().is_empty());
        assert!(tokenize(" ,.!\n\n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_tokenize_lines() {
        let words = tokenize("hello world\nfoo\n\nbar".as_bytes()).unwrap();
        assert_eq!(words, vec!["hello", "world", "foo", "bar"]);
    }

    #[test]
    fn test_tokenize_splits_long_words() {
        let text = "a".repeat(MAX_WORD_LEN + 5);
        let words = tokenize(text.as_bytes()).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].len(), MAX_WORD_LEN);
        assert_eq!(words[1], "aaaaa");
    }

    #[test]
    fn test_tokenize_invalid_utf8() {
        let words = tokenize(&b"caf\xff bar"[..]).unwrap();
        assert_eq!(words, vec!["caf", "bar"]);
    }

    #[test]
    fn test_find_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("nested").join("a.txt"), "a").unwrap();

        let files = find_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("b.txt"), dir.path().join("nested").join("a.txt")],
        );
    }

    #[test]
    fn test_find_files_file_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mail.txt");
        fs::write(&path, "hello").unwrap();

        assert_eq!(find_files(&path).unwrap(), vec![path]);
    }

    #[test]
    fn test_find_files_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_files(dir.path().join("missing")).is_err());
    }
}
