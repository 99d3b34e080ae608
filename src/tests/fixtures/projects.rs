// Shared test fixture for projects.

use crate::modules::tracking::core::project::Project;
use crate::tests::fixtures::clock::local;

/// An active project updated at 08:00 on the fixture day.
pub fn make_project(name: &str) -> Project {
    Project::new(name, local(8, 0))
}

#[allow(dead_code)]
pub fn make_inactive_project(name: &str) -> Project {
    Project {
        active: false,
        ..make_project(name)
    }
}
