//! Directory tree built from a flat path list, and its renderings.
//!
//! The tree is a pure function of the paths it is built from: the same set
//! of paths yields the same tree regardless of input order. Children are kept
//! in byte-wise name order with no grouping of directories before files.

use serde::Serialize;
use std::collections::BTreeMap;

/// Box-drawing characters for the ASCII rendering.
const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const VERTICAL: &str = "│   ";
const SPACE: &str = "    ";

/// A node in the tree. Names are the map keys of the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// A file leaf.
    File,
    /// A directory with its children ordered by name.
    Directory(BTreeMap<String, TreeNode>),
}

impl TreeNode {
    /// Check if this is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, TreeNode::Directory(_))
    }

    /// Count the file leaves below (and including) this node.
    pub fn file_count(&self) -> usize {
        match self {
            TreeNode::File => 1,
            TreeNode::Directory(children) => children.values().map(TreeNode::file_count).sum(),
        }
    }
}

/// The nested directory structure of a repository's selected files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryTree {
    root: BTreeMap<String, TreeNode>,
}

impl DirectoryTree {
    /// Builds the tree from relative paths separated by `/` (or the OS
    /// separator).
    ///
    /// Every path becomes one file leaf and each of its leading segments a
    /// directory. When a name is used both as a file and as a directory
    /// prefix, the directory wins and the file leaf is dropped.
    ///
    /// # Examples
    /// ```
    /// use to_llm_view::tree::DirectoryTree;
    ///
    /// let tree = DirectoryTree::from_paths(&["src/main.rs", "Cargo.toml", "src/cli.rs"]);
    /// assert_eq!(
    ///     tree.ascii_lines(),
    ///     vec!["├── Cargo.toml", "└── src", "    ├── cli.rs", "    └── main.rs"]
    /// );
    /// ```
    pub fn from_paths<S: AsRef<str>>(paths: &[S]) -> Self {
        let mut sorted: Vec<&str> = paths.iter().map(AsRef::as_ref).collect();
        sorted.sort_unstable();

        let mut tree = Self::default();
        for path in sorted {
            tree.insert(path);
        }
        tree
    }

    fn insert(&mut self, path: &str) {
        let parts: Vec<&str> = path
            .split(|c| c == '/' || c == std::path::MAIN_SEPARATOR)
            .filter(|part| !part.is_empty())
            .collect();
        let Some((file_name, dirs)) = parts.split_last() else {
            log::debug!("Ignoring empty path in tree: {:?}", path);
            return;
        };

        let mut current = &mut self.root;
        for dir in dirs {
            let node = current
                .entry((*dir).to_string())
                .or_insert_with(|| TreeNode::Directory(BTreeMap::new()));
            if !node.is_directory() {
                log::debug!("'{}' is both a file and a directory; keeping the directory", dir);
                *node = TreeNode::Directory(BTreeMap::new());
            }
            current = match node {
                TreeNode::Directory(children) => children,
                TreeNode::File => unreachable!("node was just made a directory"),
            };
        }

        current
            .entry((*file_name).to_string())
            .or_insert(TreeNode::File);
    }

    /// Whether the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Number of file leaves.
    pub fn file_count(&self) -> usize {
        self.root.values().map(TreeNode::file_count).sum()
    }

    /// Top-level entries, ordered by name.
    pub fn entries(&self) -> &BTreeMap<String, TreeNode> {
        &self.root
    }

    /// Renders the tree with box-drawing connectors, one line per entry.
    pub fn ascii_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        render_ascii(&self.root, "", &mut lines);
        lines
    }

    /// Renders the tree as a dash-indented outline: each entry is
    /// `"{dashes}-| name"` with one extra dash per depth level, and
    /// directories carry a trailing `/`.
    ///
    /// # Examples
    /// ```
    /// use to_llm_view::tree::DirectoryTree;
    ///
    /// let tree = DirectoryTree::from_paths(&["a/b/c.txt", "d.txt"]);
    /// assert_eq!(tree.outline_lines(), vec!["-| a/", "--| b/", "---| c.txt", "-| d.txt"]);
    /// ```
    pub fn outline_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        render_outline(&self.root, "", &mut lines);
        lines
    }

    /// The tree as JSON-ready nodes: a file is its bare name, a directory is
    /// `{"dir": name, "files": [...]}`.
    pub fn json_nodes(&self) -> Vec<JsonNode<'_>> {
        json_nodes(&self.root)
    }
}

fn render_ascii(children: &BTreeMap<String, TreeNode>, prefix: &str, lines: &mut Vec<String>) {
    let count = children.len();
    for (i, (name, node)) in children.iter().enumerate() {
        let is_last = i + 1 == count;
        let branch = if is_last { LAST_BRANCH } else { BRANCH };
        lines.push(format!("{}{}{}", prefix, branch, name));

        if let TreeNode::Directory(grandchildren) = node {
            let continuation = if is_last { SPACE } else { VERTICAL };
            render_ascii(grandchildren, &format!("{}{}", prefix, continuation), lines);
        }
    }
}

fn render_outline(children: &BTreeMap<String, TreeNode>, dashes: &str, lines: &mut Vec<String>) {
    for (name, node) in children {
        match node {
            TreeNode::File => lines.push(format!("{}-| {}", dashes, name)),
            TreeNode::Directory(grandchildren) => {
                lines.push(format!("{}-| {}/", dashes, name));
                render_outline(grandchildren, &format!("{}-", dashes), lines);
            }
        }
    }
}

/// Serialized form of a tree node.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum JsonNode<'a> {
    /// A file, serialized as its name.
    File(&'a str),
    /// A directory, serialized as `{"dir": name, "files": [...]}`.
    Directory {
        /// Directory name.
        dir: &'a str,
        /// Children in name order.
        files: Vec<JsonNode<'a>>,
    },
}

fn json_nodes(children: &BTreeMap<String, TreeNode>) -> Vec<JsonNode<'_>> {
    children
        .iter()
        .map(|(name, node)| match node {
            TreeNode::File => JsonNode::File(name),
            TreeNode::Directory(grandchildren) => JsonNode::Directory {
                dir: name,
                files: json_nodes(grandchildren),
            },
        })
        .collect()
}
