//! The subset of `cargo metadata` output the checks read.

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Metadata {
    pub packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
pub struct Package {
    pub name: String,
    pub dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
pub struct Dependency {
    pub name: String,
    /// `null` for normal dependencies, otherwise `"dev"` or `"build"`.
    pub kind: Option<String>,
}

impl Metadata {
    pub fn parse(raw: &[u8]) -> anyhow::Result<Self> {
        serde_json::from_slice(raw).context("decoding cargo metadata")
    }

    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.name == name)
    }
}

impl Dependency {
    pub fn is_normal(&self) -> bool {
        self.kind.is_none()
    }
}
