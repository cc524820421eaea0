#[cfg(test)]
mod tests {
    use crate::suites::{self, EMIT_LEVELS};
    use anyhow::Result;
    use yaso_bench_core::{MemorySink, Registry};

    fn titles(registry: &Registry) -> Vec<String> {
        registry.entries().map(|e| e.title().to_string()).collect()
    }

    #[test]
    fn test_events_suite_registers_each_level() -> Result<()> {
        let mut registry = Registry::new();
        suites::register_events(&mut registry);

        assert_eq!(registry.len(), EMIT_LEVELS.len());
        assert_eq!(registry.categories(), vec!["events"]);
        assert_eq!(titles(&registry)[0], "emitter.emit('dummy') * 1");
        assert_eq!(titles(&registry)[8], "emitter.emit('dummy') * 1000");

        let mut sink = MemorySink::new();
        registry.run_all(&mut sink)?;
        assert_eq!(sink.lines().len(), EMIT_LEVELS.len() * 3 + 2);
        Ok(())
    }

    #[test]
    fn test_path_suite_runs() -> Result<()> {
        let mut registry = Registry::new();
        suites::register_path(&mut registry);

        assert_eq!(registry.len(), 9);
        assert_eq!(titles(&registry)[0], "path.parse('/usr/bin/yaso')");
        assert_eq!(titles(&registry)[8], "path.isAbsolute('/usr/bin/yaso')");

        registry.run_all(&mut MemorySink::new())
    }

    #[test]
    fn test_process_suite_runs() -> Result<()> {
        let mut registry = Registry::new();
        suites::register_process(&mut registry);
        assert_eq!(
            titles(&registry),
            vec!["process.cwd()", "process.hrtime()", "process.hrtime.bigint()"]
        );
        registry.run_all(&mut MemorySink::new())
    }

    #[test]
    fn test_os_suite_titles() {
        let mut registry = Registry::new();
        suites::register_os(&mut registry);
        assert_eq!(
            titles(&registry),
            vec!["os.arch()", "os.machine()", "os.type()", "os.version()", "os.tmpdir()"]
        );
    }

    #[test]
    fn test_register_all_keeps_suite_order() {
        let mut registry = Registry::new();
        suites::register_all(&mut registry);
        assert_eq!(registry.categories(), vec!["events", "os", "path", "process"]);
        assert_eq!(registry.len(), 9 + 5 + 9 + 3);
    }

    #[test]
    fn test_register_suite_by_name() -> Result<()> {
        let mut registry = Registry::new();
        suites::register_suite(&mut registry, "process")?;
        suites::register_suite(&mut registry, "path")?;
        assert_eq!(registry.categories(), vec!["process", "path"]);
        Ok(())
    }

    #[test]
    fn test_register_suite_unknown_name() {
        let mut registry = Registry::new();
        let err = suites::register_suite(&mut registry, "fs").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("unknown suite 'fs'"), "{}", msg);
        assert!(msg.contains("events, os, path, process"), "{}", msg);
        assert!(registry.is_empty());
    }
}
