//! Call-site resolution
//!
//! Every emitted line names the code that invoked the logger, never the
//! logger's own frames. Two sources feed a [`CallSite`]:
//!
//! - `#[track_caller]` on the level methods. The compiler threads the
//!   caller's location through every `#[track_caller]` frame, so internal
//!   helpers are skipped for free. `Location` has no function name, so the
//!   stack is walked once per call site and the frame whose debug info points
//!   at that file and line names the function. Results are cached.
//! - The logging macros, which capture the enclosing function path with
//!   [`function_path!`](crate::function_path) and the line with `line!()`.

use parking_lot::RwLock;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::panic::Location;
use std::path::Path;
use std::sync::OnceLock;

/// Function name reported when no caller information is available
pub const UNKNOWN_FUNCTION: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub function: Cow<'static, str>,
    pub line: Option<u32>,
}

impl CallSite {
    pub fn new(function: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self {
            function: function.into(),
            line: Some(line),
        }
    }

    /// The location of whoever called the outermost `#[track_caller]` frame.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    /// Name the function containing `location`.
    ///
    /// The frame for `location` must still be on the current stack. Falls
    /// back to [`CallSite::unknown`] when no frame resolves, e.g. in builds
    /// without debug info.
    pub fn from_location(location: &'static Location<'static>) -> Self {
        let key = (location.file(), location.line(), location.column());
        if let Some(cached) = resolved_names().read().get(&key).copied() {
            return Self::from_resolved(cached, location.line());
        }

        // Bounded by the number of call sites in the program.
        let resolved: Option<&'static str> =
            resolve_function(location).map(|name| &*Box::leak(name.into_boxed_str()));
        let name = *resolved_names().write().entry(key).or_insert(resolved);
        Self::from_resolved(name, location.line())
    }

    fn from_resolved(function: Option<&'static str>, line: u32) -> Self {
        match function {
            Some(function) => Self::new(function, line),
            None => Self::unknown(),
        }
    }

    pub fn unknown() -> Self {
        Self {
            function: Cow::Borrowed(UNKNOWN_FUNCTION),
            line: None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.line.is_none() && self.function == UNKNOWN_FUNCTION
    }
}

impl Default for CallSite {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Renders `<function>.<line>`; a missing line prints as `0`.
impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.function, self.line.unwrap_or(0))
    }
}

type SiteKey = (&'static str, u32, u32);

fn resolved_names() -> &'static RwLock<HashMap<SiteKey, Option<&'static str>>> {
    static NAMES: OnceLock<RwLock<HashMap<SiteKey, Option<&'static str>>>> = OnceLock::new();
    NAMES.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Walk the stack for the innermost frame whose debug info matches `location`.
fn resolve_function(location: &Location<'_>) -> Option<String> {
    let file = Path::new(location.file());
    let mut found: Option<String> = None;

    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if found.is_some() || symbol.lineno() != Some(location.line()) {
                return;
            }
            if symbol.filename().is_some_and(|f| f.ends_with(file)) {
                found = symbol.name().map(|name| format!("{:#}", name));
            }
        });
        found.is_none()
    });

    found.map(|name| trim_closures(strip_symbol_hash(&name)).to_string())
}

/// Drops a legacy `::h<16 hex>` mangling hash, if any survived demangling.
fn strip_symbol_hash(name: &str) -> &str {
    match name.rsplit_once("::h") {
        Some((path, hash)) if hash.len() == 16 && hash.chars().all(|c| c.is_ascii_hexdigit()) => {
            path
        }
        _ => name,
    }
}

/// Removes trailing `{{closure}}` / `{closure#N}` segments.
fn trim_closures(mut path: &str) -> &str {
    while let Some((outer, last)) = path.rsplit_once("::") {
        if !(last.starts_with('{') && last.contains("closure")) {
            break;
        }
        path = outer;
    }
    path
}

/// Trims the probe suffix and any closure segments off a `type_name` path.
#[doc(hidden)]
pub fn trim_function_path(raw: &'static str) -> &'static str {
    trim_closures(raw.strip_suffix("::__probe").unwrap_or(raw))
}

/// Expands to the full path of the enclosing function, e.g. `my_app::server::run`.
///
/// # Examples
///
/// ```
/// use leveled_logger::function_path;
///
/// fn handler() -> &'static str {
///     function_path!()
/// }
///
/// assert!(handler().ends_with("handler"));
/// ```
#[macro_export]
macro_rules! function_path {
    () => {{
        fn __probe() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::core::call_site::trim_function_path(__type_name_of(__probe))
    }};
}
