use super::Project;

/// Image carousel of the project detail view. Navigation wraps around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<String>,
    current: usize,
}

impl Gallery {
    pub fn for_project(project: &Project) -> Self {
        Self {
            images: project.images().into_iter().map(str::to_string).collect(),
            current: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn has_multiple(&self) -> bool {
        self.images.len() > 1
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.current = (self.current + 1) % self.images.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.images.is_empty() {
            self.current = (self.current + self.images.len() - 1) % self.images.len();
        }
    }

    /// Jumps to `index`; out of range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.images.len() {
            self.current = index;
        }
    }

    /// "k / n", one-based.
    pub fn position(&self) -> String {
        format!("{} / {}", self.current + 1, self.images.len())
    }
}
