// Copyright 2020 Zachary Stewart
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
//! Fixed parameters of the standard game.

/// Side length of the standard square board.
pub const BOARD_SIZE: usize = 10;

/// Deck counts of the standard fleet: one four-decker, two three-deckers, three
/// two-deckers and four single-deck boats.
pub const STANDARD_FLEET: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of decks in [`STANDARD_FLEET`].
pub const STANDARD_FLEET_DECKS: usize = 4 + 3 * 2 + 2 * 3 + 4;
