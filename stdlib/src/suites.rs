//! Benchmark suites
//!
//! Each suite registers one category of runtime library calls. Titles are
//! written the way the call looks from a script so the console report reads
//! like the code being timed.

use crate::{events::EventEmitter, os, path, process};
use anyhow::{Result, anyhow};
use std::cell::RefCell;
use std::hint::black_box;
use std::rc::Rc;
use yaso_bench_core::Registry;

/// Emission counts timed by the events suite.
pub const EMIT_LEVELS: [usize; 9] = [1, 5, 10, 25, 50, 100, 250, 500, 1000];

#[derive(Debug, Clone, Copy)]
pub struct Suite {
    pub name: &'static str,
    pub register: fn(&mut Registry),
}

pub const SUITES: &[Suite] = &[
    Suite {
        name: "events",
        register: register_events,
    },
    Suite {
        name: "os",
        register: register_os,
    },
    Suite {
        name: "path",
        register: register_path,
    },
    Suite {
        name: "process",
        register: register_process,
    },
];

pub fn suite_names() -> Vec<&'static str> {
    SUITES.iter().map(|s| s.name).collect()
}

/// Register the suite called `name`.
pub fn register_suite(registry: &mut Registry, name: &str) -> Result<()> {
    let suite = SUITES
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| anyhow!("unknown suite '{}' (available: {})", name, suite_names().join(", ")))?;
    (suite.register)(registry);
    tracing::debug!(target: "yaso::suites", suite = name, total = registry.len(), "registered");
    Ok(())
}

pub fn register_all(registry: &mut Registry) {
    for suite in SUITES {
        (suite.register)(registry);
    }
}

pub fn register_events(registry: &mut Registry) {
    let emitter: Rc<RefCell<EventEmitter<()>>> = Rc::default();
    emitter.borrow_mut().on("dummy", |_| Ok(()));

    for level in EMIT_LEVELS {
        let emitter = Rc::clone(&emitter);
        registry.register("events", format!("emitter.emit('dummy') * {}", level), move || {
            let mut emitter = emitter.borrow_mut();
            for _ in 0..level {
                black_box(emitter.emit("dummy", &())?);
            }
            Ok(())
        });
    }
}

pub fn register_os(registry: &mut Registry) {
    registry.register("os", "os.arch()", || {
        black_box(os::arch());
        Ok(())
    });
    registry.register("os", "os.machine()", || {
        black_box(os::machine()?);
        Ok(())
    });
    registry.register("os", "os.type()", || {
        black_box(os::os_type());
        Ok(())
    });
    registry.register("os", "os.version()", || {
        black_box(os::version()?);
        Ok(())
    });
    registry.register("os", "os.tmpdir()", || {
        black_box(os::tmpdir());
        Ok(())
    });
}

pub fn register_path(registry: &mut Registry) {
    registry.register("path", "path.parse('/usr/bin/yaso')", || {
        black_box(path::parse("/usr/bin/yaso"));
        Ok(())
    });

    let parts = path::ParsedPath {
        root: "/".into(),
        dir: "/usr/bin".into(),
        base: "yaso".into(),
        ext: "".into(),
        name: "yaso".into(),
    };
    registry.register(
        "path",
        "path.format({ root: '/', dir: '/usr/bin', base: 'yaso', ext: '', name: 'yaso', })",
        move || {
            black_box(path::format(&parts));
            Ok(())
        },
    );

    registry.register("path", "path.normalize('.//./../...//path/benchmarks.mjs')", || {
        black_box(path::normalize(".//./../...//path/benchmarks.mjs"));
        Ok(())
    });
    registry.register(
        "path",
        "path.resolve('usr/bin/yaso', '../hyperfine', '../../lib/rustlib')",
        || {
            black_box(path::resolve(&["usr/bin/yaso", "../hyperfine", "../../lib/rustlib"])?);
            Ok(())
        },
    );
    registry.register(
        "path",
        "path.join('/usr/bin/yaso', '../hyperfine', '../../lib/rustlib')",
        || {
            black_box(path::join(&["/usr/bin/yaso", "../hyperfine", "../../lib/rustlib"]));
            Ok(())
        },
    );
    registry.register("path", "path.dirname('../path/benchmarks.mjs')", || {
        black_box(path::dirname("../path/benchmarks.mjs"));
        Ok(())
    });
    registry.register("path", "path.basename('../path/benchmarks.mjs')", || {
        black_box(path::basename("../path/benchmarks.mjs", None));
        Ok(())
    });
    registry.register("path", "path.extname('../path/benchmarks.mjs')", || {
        black_box(path::extname("../path/benchmarks.mjs"));
        Ok(())
    });
    registry.register("path", "path.isAbsolute('/usr/bin/yaso')", || {
        black_box(path::is_absolute("/usr/bin/yaso"));
        Ok(())
    });
}

pub fn register_process(registry: &mut Registry) {
    registry.register("process", "process.cwd()", || {
        black_box(process::cwd()?);
        Ok(())
    });
    registry.register("process", "process.hrtime()", || {
        black_box(process::hrtime());
        Ok(())
    });
    registry.register("process", "process.hrtime.bigint()", || {
        black_box(process::hrtime_bigint());
        Ok(())
    });
}
