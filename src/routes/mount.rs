//! The host side of mounting.

use axum::Router;

use crate::discovery::MountPath;

/// Something that accepts routers at mount paths.
///
/// The router receives every request under `mount_path` and its sub-paths.
pub trait MountTarget {
    fn mount(&mut self, mount_path: &MountPath, router: Router);
}

impl<T: MountTarget + ?Sized> MountTarget for &mut T {
    fn mount(&mut self, mount_path: &MountPath, router: Router) {
        (**self).mount(mount_path, router)
    }
}

/// Collects mounts in call order without serving them.
#[derive(Debug, Default)]
pub struct MountLog {
    pub mounts: Vec<MountPath>,
}

impl MountTarget for MountLog {
    fn mount(&mut self, mount_path: &MountPath, _router: Router) {
        self.mounts.push(mount_path.clone());
    }
}
