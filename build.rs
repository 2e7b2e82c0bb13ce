// SPDX-License-Identifier: MPL-2.0
//! Build script for platform-specific resources.
//!
//! On Windows, this embeds version metadata into the executable so it shows
//! up in the file properties dialog and task manager.

fn main() {
    // Only run on Windows
    #[cfg(target_os = "windows")]
    {
        let mut res = winresource::WindowsResource::new();
        res.set("ProductName", "Changelog Viewer");
        res.set("FileDescription", "Changelog Viewer");
        res.set("LegalCopyright", "MPL-2.0");
        res.compile().expect("Failed to compile Windows resources");
    }
}
