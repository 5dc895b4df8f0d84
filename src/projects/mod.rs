// Static project catalogue shown in the showcase and detail views

pub mod gallery;

use std::{collections::HashSet, fs, path::Path};

use egui::Color32;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::errors::VitrineError;

pub use gallery::Gallery;

const EMBEDDED_CATALOGUE: &str = include_str!("../../data/projects.json");

/// Order of the filter chips after "all".
const FILTER_TAGS: [&str; 7] = [
    "Web",
    "App",
    "UI/UX",
    "Vue",
    "Professional",
    "Design",
    "Coding Challenge",
];

const INDIGO: Color32 = Color32::from_rgb(0x63, 0x66, 0xF1);
const PINK: Color32 = Color32::from_rgb(0xEC, 0x48, 0x99);
const PURPLE: Color32 = Color32::from_rgb(0x8B, 0x5C, 0xF6);
const GREEN: Color32 = Color32::from_rgb(0x10, 0xB9, 0x81);
const AMBER: Color32 = Color32::from_rgb(0xF5, 0x9E, 0x0B);
const BLUE: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);

/// Accent colour by tag, first match wins.
const TAG_COLORS: [(&str, Color32); 6] = [
    ("Web", INDIGO),
    ("App", PINK),
    ("UI/UX", PURPLE),
    ("Vue", GREEN),
    ("Design", AMBER),
    ("Coding Challenge", BLUE),
];

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Cover image path, relative to the assets root
    pub image: String,
    #[serde(default)]
    pub additional_images: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub detail_description: Option<String>,
}

impl Project {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn accent_color(&self) -> Color32 {
        accent_color(&self.tags)
    }

    /// Cover image followed by the additional images.
    pub fn images(&self) -> Vec<&str> {
        std::iter::once(self.image.as_str())
            .chain(self.additional_images.iter().map(String::as_str))
            .collect()
    }
}

pub fn accent_color(tags: &[String]) -> Color32 {
    TAG_COLORS
        .iter()
        .find(|(tag, _)| tags.iter().any(|t| t.as_str() == *tag))
        .map(|(_, color)| *color)
        .unwrap_or(INDIGO)
}

/// Percent-encodes the file name of `path` and keeps the directories as they are.
pub fn safe_image_path(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((directory, file_name)) => {
            format!("{}/{}", directory, urlencoding::encode(file_name))
        }
        None => urlencoding::encode(path).into_owned(),
    }
}

/// Resolves a catalogue image path against the assets root. Remote roots get
/// an encoded URL, local roots a `file://` URI egui's loaders understand.
pub fn image_uri(assets_root: &str, path: &str) -> String {
    let root = assets_root.trim_end_matches('/');
    if root.starts_with("http://") || root.starts_with("https://") {
        format!("{}{}", root, safe_image_path(path))
    } else {
        format!("file://{}{}", root, path)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    pub fn label(&self) -> &str {
        match self {
            TagFilter::All => "all",
            TagFilter::Tag(tag) => tag.as_str(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(tag) => project.has_tag(tag),
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            TagFilter::All => PURPLE,
            TagFilter::Tag(tag) => accent_color(std::slice::from_ref(tag)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Catalogue {
    projects: Vec<Project>,
}

impl Catalogue {
    /// The catalogue compiled into the binary.
    pub fn embedded() -> Result<Self, VitrineError> {
        Self::from_json(EMBEDDED_CATALOGUE)
    }

    pub fn from_file(path: &Path) -> Result<Self, VitrineError> {
        let contents =
            fs::read_to_string(path).map_err(|e| VitrineError::CatalogueIOError { source: e })?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, VitrineError> {
        let projects: Vec<Project> = serde_json::from_str(json)
            .map_err(|e| VitrineError::CatalogueParseError { source: e })?;
        Self::new(projects)
    }

    pub fn new(projects: Vec<Project>) -> Result<Self, VitrineError> {
        let mut ids = HashSet::new();
        for project in &projects {
            if !ids.insert(project.id) {
                return Err(VitrineError::CatalogueValidationError {
                    reason: format!("duplicate project id {}", project.id),
                });
            }
            if project.title.trim().is_empty() {
                return Err(VitrineError::CatalogueValidationError {
                    reason: format!("project {} has no title", project.id),
                });
            }
        }
        Ok(Self { projects })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Projects matching `filter`, in catalogue order.
    pub fn filter(&self, filter: &TagFilter) -> Vec<&Project> {
        self.projects.iter().filter(|p| filter.matches(p)).collect()
    }

    /// "all" followed by the fixed chip order.
    pub fn filters() -> Vec<TagFilter> {
        std::iter::once(TagFilter::All)
            .chain(FILTER_TAGS.iter().map(|tag| TagFilter::Tag(tag.to_string())))
            .collect()
    }

    /// Every tag used in the catalogue, in order of first appearance.
    pub fn tags(&self) -> Vec<&str> {
        self.projects
            .iter()
            .flat_map(|p| p.tags.iter().map(String::as_str))
            .unique()
            .collect()
    }

    /// Previous and next project around `id` for the detail view navigation.
    pub fn neighbours(&self, id: u32) -> (Option<&Project>, Option<&Project>) {
        let Some(position) = self.projects.iter().position(|p| p.id == id) else {
            return (None, None);
        };
        let previous = position
            .checked_sub(1)
            .and_then(|index| self.projects.get(index));
        (previous, self.projects.get(position + 1))
    }
}
