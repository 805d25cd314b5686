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

/// Pages per output file when neither the CLI nor the config says otherwise
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Number of search hits included in the prompt context
pub const DEFAULT_NUM_CHUNKS: usize = 10;

pub const DEFAULT_CHAT_MODEL: &str = "mixtral-8x7b";

/// Lifetime of the links handed out for related documents
pub const DEFAULT_PRESIGNED_URL_TTL_SECS: u64 = 360;

pub const CHUNK_COLUMN: &str = "chunk";
pub const PATH_COLUMN: &str = "relative_path";

pub const DEFAULT_TOKEN_ENV: &str = "SNOWFLAKE_TOKEN";
pub const DEFAULT_TOKEN_TYPE: &str = "PROGRAMMATIC_ACCESS_TOKEN";

pub const USER_AGENT: &str = concat!("docsmith/", env!("CARGO_PKG_VERSION"));
