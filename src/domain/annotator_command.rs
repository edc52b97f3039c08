//! Command line handed to the annotator process.

use std::ffi::{OsStr, OsString};
use std::fmt;

use super::{AnnotatorPaths, LauncherConfig};

/// Program plus ordered arguments for one annotator invocation.
///
/// Arguments are kept as `OsString` so paths reach the annotator byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorCommand {
    program: OsString,
    args: Vec<OsString>,
}

impl AnnotatorCommand {
    pub fn new(program: impl Into<OsString>, args: Vec<OsString>) -> Self {
        Self { program: program.into(), args }
    }

    /// Assemble the annotator command line.
    ///
    /// Flag order is fixed: `-jar`, `-d`, `-bc`, `-cp`, `-i`, `-n`, `-cn`,
    /// `--depth`, then any enabled toggles.
    pub fn build(config: &LauncherConfig, paths: &AnnotatorPaths) -> Self {
        let mut build_command = OsString::from("cd ");
        build_command.push(paths.repo_root());
        build_command.push(" && ");
        build_command.push(&config.build_script);

        let mut args: Vec<OsString> = vec!["-jar".into(), config.annotator_jar.clone().into()];
        args.extend([OsString::from("-d"), paths.out_dir().into()]);
        args.extend([OsString::from("-bc"), build_command]);
        args.extend([OsString::from("-cp"), paths.paths_file().into()]);
        args.extend([OsString::from("-i"), config.initializer.clone().into()]);
        args.extend([OsString::from("-n"), config.annotation.clone().into()]);
        args.extend([OsString::from("-cn"), config.checker_name.clone().into()]);
        args.extend([OsString::from("--depth"), config.depth.to_string().into()]);
        args.extend(config.toggles.enabled().map(|toggle| OsString::from(toggle.flag())));

        Self::new(config.vm.clone(), args)
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Full argument vector, program first.
    pub fn argv(&self) -> Vec<OsString> {
        std::iter::once(self.program.clone()).chain(self.args.iter().cloned()).collect()
    }
}

impl fmt::Display for AnnotatorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}
