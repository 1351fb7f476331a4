//! Ordered, immutable list of named camera waypoints.
//!
//! The order of the waypoints is the traversal order of the camera path and
//! is never changed after construction.

use glam::Vec3;
use std::collections::HashSet;
use std::ops::Index;
use thiserror::Error;

/// One named camera configuration: where the camera sits and what it faces.
#[derive(Clone, Debug, PartialEq)]
pub struct Waypoint {
    pub id: String,
    /// Human-readable name shown by the overlay.
    pub label: String,
    pub subtitle: Option<String>,
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Waypoint {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        position: Vec3,
        look_at: Vec3,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            subtitle: None,
            position,
            look_at,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// First three characters of the id, used by the compact mobile navigator.
    pub fn short_label(&self) -> &str {
        match self.id.char_indices().nth(3) {
            Some((end, _)) => &self.id[..end],
            None => &self.id,
        }
    }

    fn is_finite(&self) -> bool {
        self.position.is_finite() && self.look_at.is_finite()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("camera path needs at least 2 waypoints, got {count}")]
    TooFewWaypoints { count: usize },
    #[error("waypoint at index {index} has an empty id")]
    EmptyId { index: usize },
    #[error("duplicate waypoint id {0:?}")]
    DuplicateId(String),
    #[error("waypoint {id:?} has a non-finite position or look-at")]
    NonFiniteCoordinate { id: String },
}

#[derive(Clone, Debug)]
pub struct SectionCatalog {
    waypoints: Vec<Waypoint>,
}

#[allow(clippy::len_without_is_empty)]
impl SectionCatalog {
    /// Validate and freeze a list of waypoints. Fails fast on anything the
    /// interpolator cannot run with.
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self, CatalogError> {
        if waypoints.len() < 2 {
            return Err(CatalogError::TooFewWaypoints {
                count: waypoints.len(),
            });
        }
        let mut seen = HashSet::with_capacity(waypoints.len());
        for (index, w) in waypoints.iter().enumerate() {
            if w.id.is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !seen.insert(w.id.as_str()) {
                return Err(CatalogError::DuplicateId(w.id.clone()));
            }
            if !w.is_finite() {
                return Err(CatalogError::NonFiniteCoordinate { id: w.id.clone() });
            }
        }
        log::debug!("[catalog] {} waypoints", waypoints.len());
        Ok(Self { waypoints })
    }

    /// The five-zone portfolio path: hero, about, skills, projects, contact.
    pub fn portfolio() -> Self {
        Self::new(vec![
            Waypoint::new("hero", "SREEKANTH", Vec3::new(0.0, 0.0, 12.0), Vec3::ZERO)
                .with_subtitle("Creative Developer"),
            Waypoint::new(
                "about",
                "ABOUT",
                Vec3::new(10.0, 7.0, 9.0),
                Vec3::new(0.0, 4.0, 0.0),
            )
            .with_subtitle("Who I Am"),
            Waypoint::new(
                "skills",
                "SKILLS",
                Vec3::new(-6.0, 5.0, 10.0),
                Vec3::new(0.0, 5.0, 0.0),
            )
            .with_subtitle("What I Do"),
            Waypoint::new(
                "projects",
                "PROJECTS",
                Vec3::new(0.0, 10.0, 8.0),
                Vec3::new(0.0, 10.0, 0.0),
            )
            .with_subtitle("What I Build"),
            Waypoint::new(
                "contact",
                "CONTACT",
                Vec3::new(0.0, 15.0, 10.0),
                Vec3::new(0.0, 15.0, 0.0),
            )
            .with_subtitle("Let's Connect"),
        ])
        .expect("built-in portfolio catalog is valid")
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn last_index(&self) -> usize {
        self.waypoints.len() - 1
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.iter()
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.waypoints.iter().position(|w| w.id == id)
    }
}

impl Index<usize> for SectionCatalog {
    type Output = Waypoint;

    fn index(&self, index: usize) -> &Waypoint {
        &self.waypoints[index]
    }
}
