// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Catalog file loading.
//!
//! A catalog file holds one video per line in the form:
//!
//! ```text
//! Amazing Cats | amazing_cats_video_id | #cat, #animal
//! ```
//!
//! The tag column is optional. Blank lines are skipped.

use std::{fs, path::Path};

use thiserror::Error;

use crate::{catalog::Catalog, model::Video};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog entry on line {line}: {reason}")]
    Malformed { line: usize, reason: &'static str },

    #[error("Duplicate video id in catalog: {id}")]
    DuplicateId { id: String },
}

/// Reads and parses a catalog file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if any entry is malformed,
/// see [`parse_catalog`].
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let catalog = parse_catalog(&text)?;
    tracing::info!(path = %path.display(), videos = catalog.len(), "Loaded catalog");

    Ok(catalog)
}

/// Parses catalog text.
///
/// # Errors
///
/// Returns [`CatalogError::Malformed`] for a line without an id column or with
/// an empty title or id, and [`CatalogError::DuplicateId`] if an id repeats.
pub fn parse_catalog(text: &str) -> Result<Catalog, CatalogError> {
    let mut videos = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        videos.push(parse_line(idx + 1, line)?);
    }

    Catalog::from_videos(videos)
}

fn parse_line(line_number: usize, line: &str) -> Result<Video, CatalogError> {
    let mut fields = line.split('|').map(str::trim);

    let title = fields.next().unwrap_or_default();
    let id = fields.next().ok_or(CatalogError::Malformed {
        line: line_number,
        reason: "missing id column",
    })?;
    let tags = fields
        .next()
        .map(|column| {
            column
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    if title.is_empty() {
        return Err(CatalogError::Malformed {
            line: line_number,
            reason: "empty title",
        });
    }
    if id.is_empty() {
        return Err(CatalogError::Malformed {
            line: line_number,
            reason: "empty id",
        });
    }

    Ok(Video::new(id, title, tags))
}
