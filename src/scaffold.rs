use crate::error::Result;
use crate::storage::{self, Storage};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Name used by the "New Project" action: `Project_<epoch seconds mod 10000>`.
pub fn auto_project_name(now: DateTime<Utc>) -> String {
    format!("Project_{}", now.timestamp().rem_euclid(10_000))
}

/// Lay out a project under the projects root and write its template files.
///
/// Re-running on an existing project is allowed and rewrites both files.
/// Returns the project directory.
pub fn create_project(storage: &Storage, name: &str) -> Result<PathBuf> {
    let dir = storage.project_dir(name);
    storage::ensure_dir(&dir)?;

    for sub in ["source", "include"] {
        if let Err(e) = storage::ensure_dir(&dir.join(sub)) {
            log::warn!("{}", e);
        }
    }

    storage::write_file(&storage.seed_source_path(name), &seed_source(name))?;
    storage::write_file(&storage.build_descriptor_path(name), &build_descriptor(name))?;
    Ok(dir)
}

/// Minimal libctru program greeting with the project name.
pub fn seed_source(name: &str) -> String {
    format!(
        r#"#include <3ds.h>
#include <stdio.h>

int main(int argc, char* argv[]) {{
    gfxInitDefault();
    consoleInit(GFX_TOP, NULL);

    printf("Hello from {name}!\n");
    printf("Created with Replit3DS IDE\n");
    printf("Press START to exit.\n");

    while (aptMainLoop()) {{
        hidScanInput();
        u32 kDown = hidKeysDown();
        if (kDown & KEY_START) break;
        gfxFlushBuffers();
        gfxSwapBuffers();
        gspWaitForVBlank();
    }}

    gfxExit();
    return 0;
}}
"#
    )
}

/// devkitARM makefile building `name` from `source/` and `include/`.
pub fn build_descriptor(name: &str) -> String {
    format!(
        "TARGET := {name}
BUILD := build
SOURCES := source
INCLUDES := include

CFLAGS := -Wall -O2 -mword-relocations -ffunction-sections
CXXFLAGS := $(CFLAGS) -fno-rtti -fno-exceptions -std=gnu++11
LDFLAGS = -specs=3dsx.specs -g
LIBS := -lctru -lm

include $(DEVKITARM)/3ds_rules
"
    )
}
