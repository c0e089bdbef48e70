//! Extension classifier
//!
//! Buckets a file name by its suffix against two fixed allow-lists: one for
//! countable text files, one for images that are tallied without being read.
//! Matching is by exact suffix (the portion after the last '.', including
//! the dot), optionally lower-cased first.

/// Which bucket a file name falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// Counted and (for the target extension) content-processed
    Text,
    /// Tallied only, content never read
    Image,
    /// Contributes to no counter
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Classifier {
    text: Vec<String>,
    image: Vec<String>,
    case_insensitive: bool,
}

impl Classifier {
    pub fn new(text: &[String], image: &[String], case_insensitive: bool) -> Self {
        let normalize = |exts: &[String]| -> Vec<String> {
            exts.iter()
                .map(|e| {
                    let e = if e.starts_with('.') {
                        e.clone()
                    } else {
                        format!(".{e}")
                    };
                    if case_insensitive {
                        e.to_lowercase()
                    } else {
                        e
                    }
                })
                .collect()
        };

        Self {
            text: normalize(text),
            image: normalize(image),
            case_insensitive,
        }
    }

    /// Classify a file name. Text is checked before image, so a file lands
    /// in at most one bucket even if a caller passes overlapping lists.
    pub fn bucket(&self, file_name: &str) -> Bucket {
        let Some(ext) = suffix(file_name) else {
            return Bucket::Ignored;
        };
        let ext = if self.case_insensitive {
            ext.to_lowercase()
        } else {
            ext.to_string()
        };

        if self.text.iter().any(|e| *e == ext) {
            Bucket::Text
        } else if self.image.iter().any(|e| *e == ext) {
            Bucket::Image
        } else {
            Bucket::Ignored
        }
    }
}

/// The suffix of a file name: everything from the last '.' to the end,
/// including the dot. Leading dots never start a suffix, so ".hidden" and
/// "..config" have none.
pub fn suffix(name: &str) -> Option<&str> {
    let stripped = name.trim_start_matches('.');
    let lead = name.len() - stripped.len();
    stripped
        .rfind('.')
        .map(|i| &name[lead + i..])
        .filter(|s| s.len() > 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn default_classifier(case_insensitive: bool) -> Classifier {
        Classifier::new(
            &strings(&[".cs", ".py", ".html", ".js", ".php", ".txt"]),
            &strings(&[".png", ".jpg", ".giff"]),
            case_insensitive,
        )
    }

    #[test]
    fn test_suffix_basic() {
        assert_eq!(suffix("Foo.cs"), Some(".cs"));
        assert_eq!(suffix("a.tar.gz"), Some(".gz"));
        assert_eq!(suffix("noext"), None);
    }

    #[test]
    fn test_suffix_hidden_files() {
        assert_eq!(suffix(".hidden"), None);
        assert_eq!(suffix("..config"), None);
        assert_eq!(suffix(".hidden.txt"), Some(".txt"));
    }

    #[test]
    fn test_suffix_trailing_dot() {
        assert_eq!(suffix("file."), None);
    }

    #[test]
    fn test_text_bucket() {
        let c = default_classifier(false);
        assert_eq!(c.bucket("Program.cs"), Bucket::Text);
        assert_eq!(c.bucket("index.html"), Bucket::Text);
        assert_eq!(c.bucket("notes.txt"), Bucket::Text);
    }

    #[test]
    fn test_image_bucket() {
        let c = default_classifier(false);
        assert_eq!(c.bucket("logo.png"), Bucket::Image);
        assert_eq!(c.bucket("photo.jpg"), Bucket::Image);
        assert_eq!(c.bucket("anim.giff"), Bucket::Image);
    }

    #[test]
    fn test_giff_not_gif() {
        // The three-letter variant with the trailing "f" is the allow-listed
        // spelling; plain .gif is not recognized.
        let c = default_classifier(false);
        assert_eq!(c.bucket("anim.gif"), Bucket::Ignored);
        assert_eq!(c.bucket("anim.giff"), Bucket::Image);
    }

    #[test]
    fn test_ignored_bucket() {
        let c = default_classifier(false);
        assert_eq!(c.bucket("data.json"), Bucket::Ignored);
        assert_eq!(c.bucket("README"), Bucket::Ignored);
    }

    #[test]
    fn test_case_sensitive_match() {
        let c = default_classifier(false);
        assert_eq!(c.bucket("Program.CS"), Bucket::Ignored);
        assert_eq!(c.bucket("logo.PNG"), Bucket::Ignored);
    }

    #[test]
    fn test_case_insensitive_match() {
        let c = default_classifier(true);
        assert_eq!(c.bucket("Program.CS"), Bucket::Text);
        assert_eq!(c.bucket("logo.PNG"), Bucket::Image);
    }

    #[test]
    fn test_extensions_normalized_without_dot() {
        let c = Classifier::new(&strings(&["cs"]), &strings(&["png"]), false);
        assert_eq!(c.bucket("Program.cs"), Bucket::Text);
        assert_eq!(c.bucket("logo.png"), Bucket::Image);
    }

    #[test]
    fn test_text_checked_before_image() {
        let c = Classifier::new(&strings(&[".x"]), &strings(&[".x"]), false);
        assert_eq!(c.bucket("a.x"), Bucket::Text);
    }
}
