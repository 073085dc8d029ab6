pub(crate) const ABOUT: &str = "\
WAD analysis tool and toughness estimation of DOOM maps.

dmon reads the maps of a WAD or PWAD and counts the hitscanners, health,
armor and ammunition placed on every skill level. From those counts it
answers the questions a map author keeps asking:
 * how many health and armor points are there for each monster?
 * how much ammunition damage is there for each monster hit point?
 * what share of the monsters are hitscanners?

Gathered for each skill level:
 1) monsters, split into hitscanners and melee/projectile monsters
 2) health points of health bonuses (1), stimpacks (10) and medikits (25)
 3) armor points of armor bonuses (1), green armor (100) and blue armor (200)
 4) ammunition, including the rounds dropped by zombiemen and shotgun guys
    and the 50 bullets every player starts with

Derived from those counts:
 * Health ratio: health points per monster
 * Armor ratio: armor points per monster
 * Bullet, shell, rocket and plasma ratios: ammunition damage per monster
   hit point
 * Hit scan %: share of the monsters that are hitscanners

Each metric is compared against a baseline sampled from a well known
megawad (DOOM2 unless --baseline says otherwise). When a metric falls on
the unfavourable side of the baseline a flag is raised; --legend lists
the flag codes.

Berserk (100), soulsphere (100) and megasphere (200) pickups are not
counted unless --bonus is given.

The metrics are a matter of taste. Decide for yourself whether they help.";

pub(crate) const LICENSE: &str = "\
Copyright (c) 2019 Wesley (beast) Werner

Permission is hereby granted, free of charge, to any person obtaining a
copy of this software and associated documentation files (the \"Software\"),
to deal in the Software without restriction, including without limitation
the rights to use, copy, modify, merge, publish, distribute, sublicense,
and/or sell copies of the Software, and to permit persons to whom the
Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included
in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS
OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN
NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM,
DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR
OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE
USE OR OTHER DEALINGS IN THE SOFTWARE.";
