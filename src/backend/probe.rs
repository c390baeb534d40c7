//! Candidate display bindings and their availability probes.
//!
//! Each candidate pairs a [`Backend`] identifier with a probe that checks
//! whether the binding can actually be bound in this session. Probes use
//! the platform's standard mechanisms for locating a display (the session
//! runtime directory and display sockets) and nothing else.

use crate::backend::{Backend, ProbeError};

pub(crate) type ProbeFn = fn() -> Result<(), ProbeError>;

/// A display binding that resolution may select.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    pub backend: Backend,
    pub probe: ProbeFn,
}

/// The ordered candidate list for this target. First entry wins.
#[cfg(any(target_os = "linux", target_os = "freebsd"))]
pub(crate) const SUPPORTED: &[Candidate] = &[
    Candidate {
        backend: Backend::Wayland,
        probe: probe_wayland,
    },
    Candidate {
        backend: Backend::X11,
        probe: probe_x11,
    },
];

/// The ordered candidate list for this target. First entry wins.
#[cfg(target_os = "macos")]
pub(crate) const SUPPORTED: &[Candidate] = &[Candidate {
    backend: Backend::AppKit,
    probe: probe_appkit,
}];

/// The ordered candidate list for this target. First entry wins.
#[cfg(target_os = "windows")]
pub(crate) const SUPPORTED: &[Candidate] = &[Candidate {
    backend: Backend::Win32,
    probe: probe_win32,
}];

/// The ordered candidate list for this target. First entry wins.
#[cfg(not(any(
    target_os = "linux",
    target_os = "freebsd",
    target_os = "macos",
    target_os = "windows"
)))]
pub(crate) const SUPPORTED: &[Candidate] = &[];

/// Probe for a reachable Wayland compositor socket.
///
/// `WAYLAND_DISPLAY` may name a socket in `XDG_RUNTIME_DIR` or hold an
/// absolute path; when unset, the conventional `wayland-0` is assumed.
#[cfg(any(target_os = "linux", target_os = "freebsd"))]
fn probe_wayland() -> Result<(), ProbeError> {
    use std::ffi::OsString;
    use std::os::unix::net::UnixStream;
    use std::path::PathBuf;

    let display =
        std::env::var_os("WAYLAND_DISPLAY").unwrap_or_else(|| OsString::from("wayland-0"));
    let path = PathBuf::from(&display);
    let path = if path.is_absolute() {
        path
    } else {
        let runtime_dir = std::env::var_os("XDG_RUNTIME_DIR")
            .ok_or_else(|| ProbeError::new("XDG_RUNTIME_DIR is not set"))?;
        PathBuf::from(runtime_dir).join(path)
    };
    UnixStream::connect(&path)
        .map(|_| ())
        .map_err(|err| ProbeError::new(format!("cannot connect to {}: {err}", path.display())))
}

/// Probe for a reachable X11 display socket.
#[cfg(any(target_os = "linux", target_os = "freebsd"))]
fn probe_x11() -> Result<(), ProbeError> {
    use std::os::unix::net::UnixStream;

    let display = std::env::var("DISPLAY").map_err(|_| ProbeError::new("DISPLAY is not set"))?;
    let number = display
        .strip_prefix(':')
        .ok_or_else(|| ProbeError::new(format!("unsupported DISPLAY value {display:?}")))?;
    // A screen suffix (":0.1") does not change the socket name.
    let number = number.split('.').next().unwrap_or(number);
    let path = format!("/tmp/.X11-unix/X{number}");
    UnixStream::connect(&path)
        .map(|_| ())
        .map_err(|err| ProbeError::new(format!("cannot connect to {path}: {err}")))
}

/// AppKit ships with the OS and is always bindable.
#[cfg(target_os = "macos")]
fn probe_appkit() -> Result<(), ProbeError> {
    Ok(())
}

/// Win32 ships with the OS and is always bindable.
#[cfg(target_os = "windows")]
fn probe_win32() -> Result<(), ProbeError> {
    Ok(())
}
