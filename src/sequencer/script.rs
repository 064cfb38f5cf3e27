use thiserror::Error;

/// One command and the output it prints: the atomic unit of a replay script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptBlock {
    /// Label shown before the command, e.g. a working-directory hint.
    pub prompt: String,
    /// The command text typed out character by character.
    pub command: String,
    /// Lines revealed after the command finishes typing. May be empty.
    pub output: Vec<String>,
}

impl ScriptBlock {
    pub fn new(
        prompt: impl Into<String>,
        command: impl Into<String>,
        output: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            command: command.into(),
            output: output.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("script contains no blocks")]
    Empty,
}

/// An ordered, immutable sequence of blocks. Guaranteed non-empty, so the
/// sequencer never has to re-check mid-animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    blocks: Vec<ScriptBlock>,
}

impl Script {
    pub fn new(blocks: Vec<ScriptBlock>) -> Result<Self, ScriptError> {
        if blocks.is_empty() {
            return Err(ScriptError::Empty);
        }
        Ok(Self { blocks })
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        // Script::new rejects empty block lists
        false
    }

    pub fn block(&self, index: usize) -> Option<&ScriptBlock> {
        self.blocks.get(index)
    }

    pub fn blocks(&self) -> &[ScriptBlock] {
        &self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_script_rejected() {
        assert_eq!(Script::new(Vec::new()), Err(ScriptError::Empty));
    }

    #[test]
    fn test_blocks_keep_order() {
        let script = Script::new(vec![
            ScriptBlock::new("~", "whoami", ["root"]),
            ScriptBlock::new("~", "uname", Vec::<String>::new()),
        ])
        .expect("two blocks should be a valid script");
        assert_eq!(script.len(), 2);
        assert_eq!(script.block(0).map(|b| b.command.as_str()), Some("whoami"));
        assert_eq!(script.block(1).map(|b| b.command.as_str()), Some("uname"));
        assert!(script.block(2).is_none());
        assert!(script.block(1).is_some_and(|b| b.output.is_empty()));
    }
}
