use crate::adapters::llvm::parser::parse_module;
use crate::domain::ports::CallGraphSource;
use crate::domain::summary::ModuleSummary;
use anyhow::{Context, Result};

/// Textual LLVM IR (.ll) call graph source
pub struct LlvmIrSource {
    pub ir_path: std::path::PathBuf,
}

impl LlvmIrSource {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> Self {
        Self {
            ir_path: path.as_ref().to_path_buf(),
        }
    }
}

impl CallGraphSource for LlvmIrSource {
    fn load(&self) -> Result<ModuleSummary> {
        let text = load_ir_text(&self.ir_path)?;
        let module_name = self
            .ir_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(parse_module(&text, &module_name))
    }
}

fn load_ir_text<P: AsRef<std::path::Path>>(path: P) -> Result<String> {
    use memmap2::Mmap;
    use std::fs::File;

    let file = File::open(&path).with_context(|| {
        format!("Failed to open IR file: {}", path.as_ref().display())
    })?;
    let mmap = unsafe { Mmap::map(&file).context("Failed to mmap IR file")? };
    Ok(String::from_utf8_lossy(&mmap[..]).into_owned())
}
