//! Process resource descriptor, detected once and memoized

use std::sync::OnceLock;

use opentelemetry::KeyValue;
use opentelemetry_sdk::Resource;

/// Memoizing cell for the process-wide resource descriptor.
///
/// Detection runs only on the first `get_or_init` call; every later call
/// returns the cached resource. Safe for concurrent first-call racers.
pub struct ResourceCache {
    cell: OnceLock<Resource>,
}

impl ResourceCache {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Build the resource on first use, reuse it afterwards.
    ///
    /// Detected attributes are merged over the SDK's built-in defaults, with
    /// the explicit service name taking precedence on key collision.
    pub fn get_or_init(
        &self,
        service_name: &str,
        detect: impl FnOnce() -> Vec<KeyValue>,
    ) -> &Resource {
        self.cell.get_or_init(|| {
            Resource::builder()
                .with_attributes(detect())
                .with_service_name(service_name.to_string())
                .build()
        })
    }
}

impl Default for ResourceCache {
    fn default() -> Self {
        Self::new()
    }
}

static RESOURCE: ResourceCache = ResourceCache::new();

/// Process-wide resource descriptor with best-effort host/process attributes.
pub fn get_resource(service_name: &str) -> Resource {
    RESOURCE.get_or_init(service_name, detect_attributes).clone()
}

/// Best-effort environment detection. Anything that cannot be determined is
/// simply left out, never an error.
fn detect_attributes() -> Vec<KeyValue> {
    let mut attrs = vec![
        KeyValue::new("os.type", std::env::consts::OS),
        KeyValue::new("process.pid", i64::from(std::process::id())),
    ];

    if let Some(host) = hostname::get().ok().and_then(|h| h.into_string().ok()) {
        attrs.push(KeyValue::new("host.name", host));
    }

    if let Some(exe) = std::env::current_exe()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
    {
        attrs.push(KeyValue::new("process.executable.name", exe));
    }

    #[cfg(target_os = "linux")]
    if let Some(id) = detect_container_id() {
        attrs.push(KeyValue::new("container.id", id));
    }

    attrs
}

/// Container id from the process's cgroup file, absent outside containers
#[cfg(target_os = "linux")]
fn detect_container_id() -> Option<String> {
    let cgroup = std::fs::read_to_string("/proc/self/cgroup").ok()?;
    container_id_from_cgroup(&cgroup)
}

/// Extract a 64-hex-digit container id from `/proc/self/cgroup` content.
///
/// Handles both plain runtime paths (`0::/docker/<id>`) and systemd scope
/// units (`0::/system.slice/docker-<id>.scope`).
#[cfg(any(target_os = "linux", test))]
fn container_id_from_cgroup(cgroup: &str) -> Option<String> {
    cgroup
        .lines()
        .filter_map(|line| line.rsplit('/').next())
        .map(|segment| {
            let segment = segment.trim_end_matches(".scope");
            segment.rsplit('-').next().unwrap_or(segment)
        })
        .find(|id| id.len() == 64 && id.bytes().all(|b| b.is_ascii_hexdigit()))
        .map(str::to_string)
}
