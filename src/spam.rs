//! Word-set spam filter.
//!
//! The spam words are the words that occur in every spam message and in no non-spam message. A
//! message is spam if it contains at least one spam word. Words are compared case-insensitively.

use crate::compare::CaseInsensitive;
use crate::red_black_tree::{self, RedBlackSet};
use crate::text;
use log::{debug, info};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::result;
use thiserror::Error;

/// Set of unique words, compared case-insensitively.
pub type WordSet = RedBlackSet<String, CaseInsensitive>;

/// Errors reported while training or classifying.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Tree(#[from] red_black_tree::Error),
}

pub type Result<T> = result::Result<T, Error>;

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> Error + '_ {
    move |source| Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Returns the set of unique words in a file.
pub fn word_set(path: &Path) -> Result<WordSet> {
    let file = File::open(path).map_err(io_error(path))?;
    let words = text::tokenize(BufReader::new(file)).map_err(io_error(path))?;

    let mut set = WordSet::with_comparator(CaseInsensitive);
    for word in words {
        set.insert(word)?;
    }
    debug!("{} has {} unique words", path.display(), set.len());
    Ok(set)
}

// Folds the word sets of every file under `dir` with `combine`. An empty directory yields an empty
// set.
fn combine_dir<F>(dir: &Path, combine: F) -> Result<WordSet>
where
    F: Fn(&WordSet, &WordSet) -> red_black_tree::Result<WordSet>,
{
    let files = text::find_files(dir).map_err(io_error(dir))?;
    let mut files = files.iter();

    let mut ret = match files.next() {
        Some(path) => word_set(path)?,
        None => return Ok(WordSet::with_comparator(CaseInsensitive)),
    };
    for path in files {
        ret = combine(&ret, &word_set(path)?)?;
    }
    Ok(ret)
}

/// The result of classifying one message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Verdict {
    /// Number of distinct spam words found in the message.
    pub spam_words: usize,
}

impl Verdict {
    pub fn is_spam(&self) -> bool {
        self.spam_words > 0
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} spam word(s) -> {}",
            self.spam_words,
            if self.is_spam() { "SPAM" } else { "Not spam" },
        )
    }
}

/// A spam filter trained on directories of spam and non-spam messages.
///
/// # Examples
///
/// ```no_run
/// use red_black_collections::spam::SpamFilter;
/// use std::path::Path;
///
/// let filter = SpamFilter::train(Path::new("spam"), Path::new("nonspam")).unwrap();
/// let verdict = filter.classify(Path::new("mail/1.txt")).unwrap();
/// println!("{}", verdict.is_spam());
/// ```
pub struct SpamFilter {
    spam_words: WordSet,
}

impl SpamFilter {
    /// Builds a filter from the words common to every file under `spam_dir`, minus every word
    /// found in any file under `nonspam_dir`.
    pub fn train(spam_dir: &Path, nonspam_dir: &Path) -> Result<Self> {
        let spam = combine_dir(spam_dir, WordSet::intersection)?;
        let nonspam = combine_dir(nonspam_dir, WordSet::union)?;
        let spam_words = spam.difference(&nonspam)?;
        info!(
            "{} words common to all spam, {} non-spam words, {} spam words",
            spam.len(),
            nonspam.len(),
            spam_words.len(),
        );
        Ok(SpamFilter { spam_words })
    }

    /// Constructs a filter from a known set of spam words.
    pub fn from_words(spam_words: WordSet) -> Self {
        SpamFilter { spam_words }
    }

    /// Returns the spam words of the filter.
    pub fn spam_words(&self) -> &WordSet {
        &self.spam_words
    }

    /// Classifies the message stored at `path`.
    pub fn classify(&self, path: &Path) -> Result<Verdict> {
        let words = word_set(path)?;
        let found = self.spam_words.intersection(&words)?;
        Ok(Verdict {
            spam_words: found.len(),
        })
    }
}
