use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::feed::{PackageFeed, PackageIter};
use crate::package::{build, PackageRecord};

/// Switches controlling how much work is done per package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectOptions {
    /// Fill in the PEP 503 normalized name
    pub normalize_names: bool,
    /// Locate and read license files
    pub include_license_files: bool,
    /// Locate and read notice and copyright files
    pub include_notice_files: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            normalize_names: true,
            include_license_files: true,
            include_notice_files: true,
        }
    }
}

/// Lazy sequence of package records.
///
/// Each call to `next` pulls one package from the feed and builds its record
/// completely before returning it. After the feed reports an error the
/// collector yields that error once and then ends.
pub struct Collector<'a, F: PackageFeed + ?Sized> {
    feed: &'a F,
    packages: PackageIter<'a>,
    options: CollectOptions,
    done: bool,
}

impl<F: PackageFeed + ?Sized> Iterator for Collector<'_, F> {
    type Item = Result<PackageRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.packages.next() {
            Some(Ok(raw)) => {
                tracing::debug!(package = %raw.name, version = %raw.version, "collecting package");
                Some(Ok(build(&raw, &self.options, self.feed)))
            }
            Some(Err(err)) => {
                tracing::warn!(%err, "package feed failed, stopping collection");
                self.done = true;
                Some(Err(err))
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl<F: PackageFeed + ?Sized> std::iter::FusedIterator for Collector<'_, F> {}

/// Start collecting records from a feed. Nothing is read until the returned
/// iterator is pulled.
pub fn collect<'a, F: PackageFeed + ?Sized>(
    feed: &'a F,
    options: CollectOptions,
) -> Result<Collector<'a, F>> {
    let packages = feed.packages()?;
    Ok(Collector {
        feed,
        packages,
        options,
        done: false,
    })
}
