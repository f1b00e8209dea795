// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::HashMap;

/// A source of display metrics.
///
/// When attached to a [`Renderer`], the parsing DPI is derived as
/// `logical_dpi() * device_pixel_ratio()` on construction and on every
/// document load.
///
/// [`Renderer`]: struct.Renderer.html
pub trait ScreenMetrics {
    /// Returns the logical, font-related DPI of the target screen.
    fn logical_dpi(&self) -> f64;

    /// Returns the device pixel ratio of the target screen.
    fn device_pixel_ratio(&self) -> f64;
}

/// Fixed display metrics.
///
/// For applications that already know their screen properties.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug)]
pub struct ScreenInfo {
    pub logical_dpi: f64,
    pub device_pixel_ratio: f64,
}

impl ScreenMetrics for ScreenInfo {
    fn logical_dpi(&self) -> f64 {
        self.logical_dpi
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }
}


/// A virtual resource reader.
///
/// Load paths starting with `:/` are resolved through this interface
/// instead of the filesystem.
pub trait ResourceResolver {
    /// Returns the content of the resource at `path`.
    ///
    /// The path is passed through unchanged, including the `:/` prefix.
    /// `None` indicates a missing resource.
    fn read(&self, path: &str) -> Option<Vec<u8>>;
}

/// An in-memory resource registry.
#[derive(Default)]
pub struct StaticResources {
    files: HashMap<String, Vec<u8>>,
}

impl StaticResources {
    /// Creates an empty registry.
    pub fn new() -> Self {
        StaticResources::default()
    }

    /// Registers resource content at the provided path.
    ///
    /// Replaces the previous content, if any.
    pub fn register(&mut self, path: &str, data: Vec<u8>) {
        self.files.insert(path.to_string(), data);
    }
}

impl ResourceResolver for StaticResources {
    fn read(&self, path: &str) -> Option<Vec<u8>> {
        self.files.get(path).cloned()
    }
}
