use anyhow::Result;

/// Template-method lifecycle for application tasks.
///
/// `run` owns the control flow: it calls [`Runner::before_run`], then the
/// required [`Runner::execute`], then [`Runner::after_run`]. Implementors
/// override the hooks to attach setup and teardown without touching the
/// flow itself. `after_run` runs even when `execute` fails.
pub trait Runner {
    /// Hook invoked before the main logic. Default: nothing.
    fn before_run(&mut self) {}

    /// Hook invoked after the main logic, regardless of outcome. Default: nothing.
    fn after_run(&mut self) {}

    /// The main logic.
    fn execute(&mut self) -> Result<()>;

    fn run(&mut self) -> Result<()> {
        self.before_run();
        let result = self.execute();
        self.after_run();
        result
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    struct Recorder {
        calls: Vec<&'static str>,
        fail: bool,
    }

    impl Runner for Recorder {
        fn before_run(&mut self) {
            self.calls.push("before");
        }

        fn after_run(&mut self) {
            self.calls.push("after");
        }

        fn execute(&mut self) -> Result<()> {
            self.calls.push("execute");
            if self.fail {
                return Err(anyhow!("boom"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_hooks_run_in_order() {
        let mut runner = Recorder {
            calls: Vec::new(),
            fail: false,
        };
        runner.run().unwrap();
        assert_eq!(runner.calls, vec!["before", "execute", "after"]);
    }

    #[test]
    fn test_after_run_fires_on_failure() {
        let mut runner = Recorder {
            calls: Vec::new(),
            fail: true,
        };
        assert!(runner.run().is_err());
        assert_eq!(runner.calls, vec!["before", "execute", "after"]);
    }

    #[test]
    fn test_default_hooks_are_noops() {
        struct Bare(bool);
        impl Runner for Bare {
            fn execute(&mut self) -> Result<()> {
                self.0 = true;
                Ok(())
            }
        }

        let mut runner = Bare(false);
        runner.run().unwrap();
        assert!(runner.0);
    }
}
