/*
This file is part of Treemap Tools
Copyright (C) 2022 Novel-T

Treemap Tools is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Unique path under the system temp dir, parent directory created
pub fn get_temp_filename(file_name: &str) -> PathBuf {
    let dir: PathBuf = [std::env::temp_dir(), PathBuf::from("treemap"), PathBuf::from(Uuid::new_v4().to_string())]
        .iter()
        .collect();
    fs::create_dir_all(&dir).unwrap();
    dir.join(file_name)
}
