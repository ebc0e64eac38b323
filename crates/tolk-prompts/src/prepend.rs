// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT

/// Read-only context interpolated into tool prompt blocks.
///
/// Only borrowed for the duration of the call; the description builder
/// interpolates `cwd` verbatim and performs no validation.
#[derive(Debug, Clone, Copy)]
pub struct ToolArgs<'a> {
    /// Current workspace directory, shown to the model so it knows what
    /// relative paths resolve against.
    pub cwd: &'a str,
}

/// Which worked-example block to append to the `prepend_to_file`
/// description.  The heading, semantics, parameter list and usage block
/// are identical across variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrependExamples {
    /// Prepending a license header to a source file.
    LicenseHeader,
    /// Prepending import statements to a component file.
    Imports,
}

impl PrependExamples {
    fn block(self) -> &'static str {
        match self {
            PrependExamples::LicenseHeader => LICENSE_HEADER_EXAMPLE,
            PrependExamples::Imports => IMPORTS_EXAMPLE,
        }
    }
}

const LICENSE_HEADER_EXAMPLE: &str = r"Example: Requesting to prepend a license header
<prepend_to_file>
<path>src/index.js</path>
<content>
/**
 * Copyright (c) 2025 Example Corp.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

</content>
</prepend_to_file>";

const IMPORTS_EXAMPLE: &str = r"Example: Requesting to prepend import statements
<prepend_to_file>
<path>src/components/Button.js</path>
<content>
import React from 'react';
import PropTypes from 'prop-types';
import './Button.css';

</content>
</prepend_to_file>";

/// Shared portion of the description: heading, semantics, parameters
/// (with `cwd` interpolated) and the usage block.
fn description_header(cwd: &str) -> String {
    format!(
        "## prepend_to_file\n\
         Description: Request to prepend content to a file at the specified path. If the file \
         exists, the content will be added to the beginning of the file. If the file doesn't \
         exist, it will be created with the provided content. This tool will automatically \
         create any directories needed to write the file.\n\
         Parameters:\n\
         - path: (required) The path of the file to prepend to (relative to the current \
         workspace directory {cwd})\n\
         - content: (required) The content to prepend to the file. The content will be added \
         at the beginning of the existing file content. Do NOT include line numbers in the \
         content.\n\
         Usage:\n\
         <prepend_to_file>\n\
         <path>File path here</path>\n\
         <content>\n\
         Your content to prepend here\n\
         </content>\n\
         </prepend_to_file>"
    )
}

/// Build the `prepend_to_file` tool description for the model prompt.
///
/// Pure and deterministic: equal `(args.cwd, examples)` inputs always
/// yield byte-identical output.  `cwd` is interpolated exactly once, in
/// the `path` parameter description; any string is accepted, including
/// the empty string.
pub fn prepend_to_file_description(args: &ToolArgs<'_>, examples: PrependExamples) -> String {
    format!("{}\n\n{}", description_header(args.cwd), examples.block())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANTS: [PrependExamples; 2] =
        [PrependExamples::LicenseHeader, PrependExamples::Imports];

    fn args(cwd: &str) -> ToolArgs<'_> {
        ToolArgs { cwd }
    }

    #[test]
    fn cwd_appears_at_the_interpolation_point() {
        for variant in VARIANTS {
            let desc = prepend_to_file_description(&args("/home/user/project"), variant);
            assert!(
                desc.contains("workspace directory /home/user/project)"),
                "cwd should appear in the path parameter description"
            );
        }
    }

    #[test]
    fn output_is_deterministic() {
        for variant in VARIANTS {
            let a = prepend_to_file_description(&args("/srv/repo"), variant);
            let b = prepend_to_file_description(&args("/srv/repo"), variant);
            assert_eq!(a, b, "equal inputs must yield byte-identical output");
        }
    }

    #[test]
    fn empty_cwd_still_produces_a_description() {
        for variant in VARIANTS {
            let desc = prepend_to_file_description(&args(""), variant);
            assert!(!desc.is_empty());
            assert!(desc.starts_with("## prepend_to_file"));
        }
    }

    #[test]
    fn arbitrary_strings_are_interpolated_verbatim() {
        let odd = "C:\\Users\\dev ✓ <tag> {braces}";
        let desc = prepend_to_file_description(&args(odd), PrependExamples::Imports);
        assert!(desc.contains(odd));
    }

    #[test]
    fn both_parameters_are_documented() {
        let desc = prepend_to_file_description(&args("/w"), PrependExamples::LicenseHeader);
        assert!(desc.contains("- path: (required)"));
        assert!(desc.contains("- content: (required)"));
        assert!(desc.contains("Do NOT include line numbers"));
    }

    #[test]
    fn semantics_cover_create_and_prepend() {
        let desc = prepend_to_file_description(&args("/w"), PrependExamples::Imports);
        assert!(desc.contains("added to the beginning of the file"));
        assert!(desc.contains("it will be created with the provided content"));
        assert!(desc.contains("automatically create any directories"));
    }

    #[test]
    fn usage_block_shows_tag_syntax() {
        let desc = prepend_to_file_description(&args("/w"), PrependExamples::LicenseHeader);
        assert!(desc.contains("Usage:\n<prepend_to_file>\n<path>File path here</path>"));
        assert!(desc.contains("Your content to prepend here"));
        assert!(desc.contains("</prepend_to_file>"));
    }

    #[test]
    fn variants_differ_only_in_the_example_block() {
        let cwd = "/repo";
        let license = prepend_to_file_description(&args(cwd), PrependExamples::LicenseHeader);
        let imports = prepend_to_file_description(&args(cwd), PrependExamples::Imports);

        let shared_license = license.split("\n\nExample:").next().unwrap();
        let shared_imports = imports.split("\n\nExample:").next().unwrap();
        assert_eq!(shared_license, shared_imports, "shared sections must match");
        assert_ne!(license, imports, "example blocks must differ");
    }

    #[test]
    fn license_variant_shows_a_license_example() {
        let desc = prepend_to_file_description(&args("/w"), PrependExamples::LicenseHeader);
        assert!(desc.contains("Example: Requesting to prepend a license header"));
        assert!(desc.contains("<path>src/index.js</path>"));
    }

    #[test]
    fn imports_variant_shows_an_imports_example() {
        let desc = prepend_to_file_description(&args("/w"), PrependExamples::Imports);
        assert!(desc.contains("Example: Requesting to prepend import statements"));
        assert!(desc.contains("<path>src/components/Button.js</path>"));
        assert!(desc.contains("import React from 'react';"));
    }
}
