//! Rule table: per-mode ordered rule lists.
//!
//! Rule lists are described with [`Entry`] values: either a concrete rule or
//! an include of a named sub-rule-set (or of another mode's full list).
//! [`RuleTableBuilder::build()`] flattens every include in place, once, so
//! the scanner only ever walks a plain slice of rules per mode.
//!
//! # Fallthrough Modes
//!
//! A mode built with [`RuleTableBuilder::fallthrough_mode()`] is popped
//! without consuming input when none of its rules match, and the scan
//! retries in the parent mode. One-shot modes use this to give up quietly
//! when the expected name is absent (`fn(int) -> int`). Every other mode
//! falls back to emitting one `Unclassified` character.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{Mode, Rule, RuleError, Transition};

/// One item in a rule list description.
#[derive(Clone, Debug)]
pub enum Entry {
    Rule(Rule),
    /// Inline the named sub-rule-set at this point.
    Include(String),
    /// Inline another mode's complete list at this point.
    IncludeMode(Mode),
}

impl Entry {
    pub fn include(name: &str) -> Self {
        Entry::Include(name.to_owned())
    }
}

impl From<Rule> for Entry {
    fn from(rule: Rule) -> Self {
        Entry::Rule(rule)
    }
}

#[derive(Clone, Debug)]
struct ModeSpec {
    entries: Vec<Entry>,
    fallthrough: bool,
}

/// Include currently being expanded, for cycle detection.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Source<'a> {
    Set(&'a str),
    Mode(Mode),
}

/// Describes rule sets and modes, then builds a [`RuleTable`].
#[derive(Clone, Debug)]
pub struct RuleTableBuilder {
    sets: FxHashMap<String, Vec<Entry>>,
    modes: [Option<ModeSpec>; Mode::COUNT],
}

impl RuleTableBuilder {
    pub fn new() -> Self {
        Self {
            sets: FxHashMap::default(),
            modes: std::array::from_fn(|_| None),
        }
    }

    /// Define (or redefine) a named sub-rule-set.
    pub fn set(&mut self, name: &str, entries: Vec<Entry>) -> &mut Self {
        self.sets.insert(name.to_owned(), entries);
        self
    }

    /// Define the rule list of `mode`.
    pub fn mode(&mut self, mode: Mode, entries: Vec<Entry>) -> &mut Self {
        self.modes[mode.index()] = Some(ModeSpec {
            entries,
            fallthrough: false,
        });
        self
    }

    /// Define the rule list of a mode that pops itself when nothing matches.
    pub fn fallthrough_mode(&mut self, mode: Mode, entries: Vec<Entry>) -> &mut Self {
        self.modes[mode.index()] = Some(ModeSpec {
            entries,
            fallthrough: true,
        });
        self
    }

    /// Flatten every include and validate mode references.
    #[tracing::instrument(level = "debug", skip_all, fields(sets = self.sets.len()))]
    pub fn build(&self) -> Result<RuleTable, RuleError> {
        if self.modes[Mode::Root.index()].is_none() {
            return Err(RuleError::MissingMode(Mode::Root));
        }

        let mut modes = Vec::with_capacity(Mode::COUNT);
        for mode in Mode::ALL {
            let mode_rules = match &self.modes[mode.index()] {
                Some(spec) => {
                    let mut rules = Vec::new();
                    let mut active = vec![Source::Mode(mode)];
                    self.flatten(&spec.entries, &mut active, &mut rules)?;
                    ModeRules {
                        rules: rules.into_boxed_slice(),
                        fallthrough: spec.fallthrough,
                    }
                }
                None => ModeRules::default(),
            };
            modes.push(mode_rules);
        }

        for mode_rules in &modes {
            for rule in mode_rules.rules.iter() {
                if let Transition::Push(target) | Transition::Replace(target) = rule.transition() {
                    if self.modes[target.index()].is_none() {
                        return Err(RuleError::MissingMode(target));
                    }
                }
            }
        }

        let table = RuleTable {
            modes: modes.into_boxed_slice(),
        };
        debug!(rules = table.rule_count(), "rule table built");
        Ok(table)
    }

    fn flatten<'a>(
        &'a self,
        entries: &'a [Entry],
        active: &mut Vec<Source<'a>>,
        out: &mut Vec<Rule>,
    ) -> Result<(), RuleError> {
        for entry in entries {
            match entry {
                Entry::Rule(rule) => out.push(rule.clone()),
                Entry::Include(name) => {
                    let source = Source::Set(name.as_str());
                    if active.contains(&source) {
                        return Err(RuleError::IncludeCycle(name.clone()));
                    }
                    let set = self
                        .sets
                        .get(name)
                        .ok_or_else(|| RuleError::UnknownSet(name.clone()))?;
                    active.push(source);
                    self.flatten(set, active, out)?;
                    active.pop();
                }
                Entry::IncludeMode(mode) => {
                    let source = Source::Mode(*mode);
                    if active.contains(&source) {
                        return Err(RuleError::IncludeCycle(mode.name().to_owned()));
                    }
                    let spec = self.modes[mode.index()]
                        .as_ref()
                        .ok_or(RuleError::MissingMode(*mode))?;
                    active.push(source);
                    self.flatten(&spec.entries, active, out)?;
                    active.pop();
                }
            }
        }
        Ok(())
    }
}

impl Default for RuleTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Default)]
struct ModeRules {
    rules: Box<[Rule]>,
    fallthrough: bool,
}

/// Flattened, immutable per-mode rule lists.
#[derive(Clone, Debug)]
pub struct RuleTable {
    /// Indexed by `Mode::index()`.
    modes: Box<[ModeRules]>,
}

impl RuleTable {
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::new()
    }

    /// Rules of `mode`, in priority order.
    #[inline]
    pub fn rules(&self, mode: Mode) -> &[Rule] {
        self.modes
            .get(mode.index())
            .map_or(&[][..], |mode_rules| &*mode_rules.rules)
    }

    #[inline]
    pub fn is_fallthrough(&self, mode: Mode) -> bool {
        self.modes
            .get(mode.index())
            .is_some_and(|mode_rules| mode_rules.fallthrough)
    }

    /// Total number of rules across all modes, after flattening.
    pub fn rule_count(&self) -> usize {
        self.modes.iter().map(|mode_rules| mode_rules.rules.len()).sum()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
