use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// One parsed source file.
///
/// The source map is kept alongside the module so later passes can read the
/// literal declared-type text back out of spans.
pub struct ParsedSource {
    pub file_path: String,
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

impl std::fmt::Debug for ParsedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedSource")
            .field("file_path", &self.file_path)
            .field("module", &self.module)
            .field("source_map", &"<SourceMap>")
            .finish()
    }
}

/// Parse TypeScript source code into an AST.
///
/// A syntax error here is fatal for the whole run; the caller propagates it
/// instead of attempting per-file recovery.
pub fn parse_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        // JSX syntax only for .tsx; enabling it for plain .ts would reject
        // angle-bracket type assertions.
        let syntax = Syntax::Typescript(TsSyntax {
            tsx: file_path.ends_with(".tsx"),
            dts: file_path.ends_with(".d.ts"),
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;

        Ok(ParsedSource {
            file_path: file_path.to_string(),
            module,
            source_map,
        })
    })
}
