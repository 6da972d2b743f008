//! The 60-pair sexagenary cycle (육십갑자).
//!
//! A stem pairs only with branches of the same parity, so exactly 60 of the
//! 120 combinations occur. Cycle position `i` holds stem `i % 10` and branch `i % 12`.

use crate::branch::Branch;
use crate::pillar::Pillar;
use crate::stem::Stem;
use crate::util::cyclic;

/// Nayin (納音) element names, one per consecutive pair of the cycle.
pub const NAYIN: [&str; 30] = [
    "海中金", "炉中火", "大林木", "路旁土", "剑锋金", "山头火", "涧下水", "城头土", "白蜡金", "杨柳木",
    "泉中水", "屋上土", "霹雳火", "松柏木", "长流水", "砂中金", "山下火", "平地木", "壁上土", "金箔金",
    "覆灯火", "天河水", "大驿土", "钗钏金", "桑柘木", "大溪水", "沙中土", "天上火", "石榴木", "大海水",
];

/// Stem and branch share parity.
pub const fn is_valid_pair(stem: Stem, branch: Branch) -> bool {
    stem.index() % 2 == branch.index() % 2
}

/// Position 0..60 of the pair in the cycle (甲子 = 0), or `None` for a mixed-parity pair.
pub const fn sexagenary_index(stem: Stem, branch: Branch) -> Option<u8> {
    if !is_valid_pair(stem, branch) {
        return None;
    }
    // Solve i ≡ s (mod 10), i ≡ b (mod 12): i = s + 10k with 10k ≡ b - s (mod 12).
    let s = stem.index() as i64;
    let b = branch.index() as i64;
    let k = cyclic((b - s) / 2 * 5, 6) as i64;
    Some((s + 10 * k) as u8)
}

/// Pillar at cycle position `index` (taken mod 60).
pub const fn pillar_from_cycle(index: i64) -> Pillar {
    let i = cyclic(index, 60) as i64;
    Pillar::new(Stem::wrapping(i), Branch::wrapping(i))
}

/// Nayin name of a valid pair.
pub const fn nayin(stem: Stem, branch: Branch) -> Option<&'static str> {
    match sexagenary_index(stem, branch) {
        Some(i) => Some(NAYIN[(i / 2) as usize]),
        None => None,
    }
}

/// The two void branches (공망) of the decade (旬) containing the pair.
pub const fn void_branches(stem: Stem, branch: Branch) -> Option<[Branch; 2]> {
    match sexagenary_index(stem, branch) {
        Some(i) => {
            let xun = (i / 10) as i64;
            let start = cyclic(10 - 2 * xun, 12) as i64;
            Some([Branch::wrapping(start), Branch::wrapping(start + 1)])
        }
        None => None,
    }
}

impl Pillar {
    pub const fn cycle_index(&self) -> Option<u8> {
        sexagenary_index(self.stem, self.branch)
    }

    pub const fn nayin(&self) -> Option<&'static str> {
        nayin(self.stem, self.branch)
    }

    pub const fn void_branches(&self) -> Option<[Branch; 2]> {
        void_branches(self.stem, self.branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::stem::ALL_STEMS;

    #[test]
    fn index_matches_brute_force() {
        for s in ALL_STEMS {
            for b in ALL_BRANCHES {
                let brute = (0..60u8).find(|i| i % 10 == s.index() && i % 12 == b.index());
                assert_eq!(sexagenary_index(s, b), brute, "{s:?}/{b:?}");
            }
        }
    }

    #[test]
    fn cycle_round_trip() {
        for i in 0..60 {
            let p = pillar_from_cycle(i);
            assert_eq!(p.cycle_index(), Some(i as u8));
        }
        assert_eq!(pillar_from_cycle(60), pillar_from_cycle(0));
        assert_eq!(pillar_from_cycle(-1), Pillar::new(Stem::Gye, Branch::Hae));
    }

    #[test]
    fn mixed_parity_rejected() {
        assert!(!is_valid_pair(Stem::Gap, Branch::Chuk));
        assert_eq!(sexagenary_index(Stem::Gap, Branch::Chuk), None);
        assert_eq!(nayin(Stem::Gap, Branch::Chuk), None);
    }

    #[test]
    fn nayin_known_values() {
        assert_eq!(nayin(Stem::Gap, Branch::Ja), Some("海中金"));
        assert_eq!(nayin(Stem::Eul, Branch::Chuk), Some("海中金"));
        assert_eq!(nayin(Stem::Gye, Branch::Hae), Some("大海水"));
        assert_eq!(nayin(Stem::Mu, Branch::O), Some("天上火"));
    }

    #[test]
    fn void_branches_first_decade() {
        // 甲子 decade lacks 戌亥.
        assert_eq!(
            void_branches(Stem::Gap, Branch::Ja),
            Some([Branch::Sul, Branch::Hae])
        );
        // 甲戌 decade lacks 申酉.
        assert_eq!(
            void_branches(Stem::Gap, Branch::Sul),
            Some([Branch::Sin, Branch::Yu])
        );
        // 甲寅 decade (last) lacks 子丑.
        assert_eq!(
            void_branches(Stem::Gye, Branch::Hae),
            Some([Branch::Ja, Branch::Chuk])
        );
    }
}
