// Copyright 2026 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docsmith")]
#[command(version, author = "Muvon Un Limited <opensource@muvon.io>")]
#[command(about = "Split PDFs into page chunks and ask questions about indexed documentation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split PDF files into smaller chunks, written to the current directory
    Split {
        /// List of PDF files to be split
        #[arg(required = true, num_args = 1..)]
        pdf_files: Vec<PathBuf>,

        /// Number of pages per chunk (defaults to splitter.chunk_size, 100)
        #[arg(long, visible_alias = "chunk_size", value_parser = clap::value_parser!(u32).range(1..))]
        chunk_size: Option<u32>,
    },

    /// List the documents available to the assistant
    Docs,

    /// Ask the documentation a question
    Ask {
        /// The question to answer
        question: String,

        /// Also print the retrieved context the answer was built from
        #[arg(long)]
        show_context: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Interactive question-and-answer session on the terminal
    Chat {
        /// Also print the retrieved context for each answer
        #[arg(long)]
        show_context: bool,
    },

    /// Start MCP server (Model Context Protocol) exposing the assistant tools
    Mcp {
        /// Enable debug logging to the log files
        #[arg(long)]
        debug: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
