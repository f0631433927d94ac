use serde::{Deserialize, Serialize};

/// One row of the input file: the current webpage name and its replacement.
/// Both are plain filenames, not paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePair {
    pub old_name: String,
    pub new_name: String,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub renames: Vec<RenamePair>,
    pub shell_output: String,
    pub htaccess_output: String,
}
