use std::path::PathBuf;

use super::args::Arguments;
use crate::{
    core::Category,
    sinks::{ExcludeManifest, ListFile, Output, Sink, StdoutList},
};

/// One requested output: which names, and where they go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub category: Category,
    pub output: Output,
}

impl Action {
    fn new(category: Category, output: impl Into<Output>) -> Self {
        Self {
            category,
            output: output.into(),
        }
    }

    /// Merge flag for this action given the invocation default.
    pub fn merge(&self, default_merge: bool) -> bool {
        default_merge || self.output.requires_merge()
    }
}

/// Actions in execution order: standard output first, then files.
pub fn plan_actions(args: &Arguments) -> Vec<Action> {
    let file = |path: &Option<PathBuf>, category: Category| {
        path.as_ref()
            .map(|path| Action::new(category, ListFile::new(path)))
    };

    let stdout = [
        (args.classlistout, Category::Classes),
        (args.fontlistout, Category::Fonts),
        (args.symbollistout, Category::Symbols),
    ]
    .into_iter()
    .filter(|(requested, _)| *requested)
    .map(|(_, category)| Action::new(category, StdoutList));

    let exclude = args
        .exclude
        .as_ref()
        .map(|path| Action::new(Category::Classes, ExcludeManifest::new(path)));

    stdout
        .chain(exclude)
        .chain(file(&args.classlist, Category::Classes))
        .chain(file(&args.fontlist, Category::Fonts))
        .chain(file(&args.symbollist, Category::Symbols))
        .collect()
}

/// Whether any action writes item lists to standard output.
pub fn writes_to_stdout(actions: &[Action]) -> bool {
    actions.iter().any(|action| action.output.is_stdout())
}

/// Merge unless asked not to, with a single source never getting markers.
pub fn default_merge(args: &Arguments, source_count: usize) -> bool {
    args.merge || source_count < 2
}
