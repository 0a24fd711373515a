//! System probe implementation.
//!
//! `DefaultSystemProbe` implements `SystemProbePort` from neurosim-core by
//! running `--version` on each tool a setup run shells out to.

mod commands;

use neurosim_core::{Dependency, SystemProbePort};

use commands::{get_cc_version, get_cmake_version, get_cxx_version, get_python3_version};

/// Default implementation of `SystemProbePort`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSystemProbe;

impl DefaultSystemProbe {
    pub const fn new() -> Self {
        Self
    }
}

impl SystemProbePort for DefaultSystemProbe {
    fn check_all_dependencies(&self) -> Vec<Dependency> {
        vec![
            Dependency::required("cmake", "Configures and builds the simulator")
                .with_hint("https://cmake.org/download/")
                .with_version(get_cmake_version()),
            Dependency::required("python3", "Creates the virtual environment")
                .with_hint("https://www.python.org/downloads/")
                .with_version(get_python3_version()),
            // MSVC has no --version; CMake finds it through the generator
            Dependency::optional("cc", "C compiler used by CMake")
                .with_hint(compiler_hint())
                .with_version(get_cc_version()),
            Dependency::optional("c++", "C++ compiler used by CMake")
                .with_hint(compiler_hint())
                .with_version(get_cxx_version()),
        ]
    }
}

const fn compiler_hint() -> &'static str {
    if cfg!(target_os = "windows") {
        "Install Visual Studio 2022 with the C++ workload"
    } else if cfg!(target_os = "macos") {
        "xcode-select --install"
    } else {
        "apt install build-essential"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_lists_required_tools() {
        let deps = DefaultSystemProbe::new().check_all_dependencies();
        let required: Vec<&str> = deps
            .iter()
            .filter(|d| d.required)
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(required, vec!["cmake", "python3"]);
        assert!(deps.iter().all(|d| d.install_hint.is_some()));
    }
}
