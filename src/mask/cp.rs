use crate::buffer::PixelBuffer;
use crate::foundation::error::{RemaskError, RemaskResult};
use crate::foundation::geom::Selection;
use crate::mask::consts::{CP_KEY, GRID_SIZE_DOUBLE, MAX_CODE_LEN};
use crate::mask::copy_cell;

/// The keyed cell permutation ("CP"): a password code drives a
/// deterministic pairing of the selection's cells; each cell swaps content
/// with its partner, and pairs whose indices differ in bit 0 are
/// additionally transposed in place. The pairing is symmetric, so the
/// transform is its own inverse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CpMask {
    // Normalized code: spaces stripped, upper-cased, stored as 0..26.
    code: Vec<u8>,
    cell: u32,
}

impl CpMask {
    /// Build from a raw code with the default 16px cell size.
    ///
    /// The code contract is `^[A-Za-z ]{1,64}$` with at least one letter;
    /// anything else is rejected here. A host that prompts for the code is
    /// expected to re-request until this accepts (or the user cancels, in
    /// which case no transform is constructed at all).
    pub fn new(code: &str) -> RemaskResult<Self> {
        Self::with_cell_size(code, GRID_SIZE_DOUBLE)
    }

    pub fn with_cell_size(code: &str, cell: u32) -> RemaskResult<Self> {
        if cell == 0 {
            return Err(RemaskError::validation("cp cell size must be > 0"));
        }
        if code.is_empty() || code.len() > MAX_CODE_LEN {
            return Err(RemaskError::validation(format!(
                "cp code must be 1..={MAX_CODE_LEN} characters, got {}",
                code.len()
            )));
        }
        if !code.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
            return Err(RemaskError::validation(
                "cp code may only contain letters and spaces",
            ));
        }

        let normalized: Vec<u8> = code
            .chars()
            .filter(|c| *c != ' ')
            .map(|c| c.to_ascii_uppercase() as u8 - b'A')
            .collect();
        if normalized.is_empty() {
            return Err(RemaskError::validation(
                "cp code must contain at least one letter",
            ));
        }

        Ok(Self {
            code: normalized,
            cell,
        })
    }

    pub fn apply(&self, buf: &mut PixelBuffer, sel: Selection) -> RemaskResult<()> {
        sel.validate_for(buf.width, buf.height)?;
        if sel.w % self.cell != 0 || sel.h % self.cell != 0 {
            return Err(RemaskError::validation(format!(
                "cp needs a selection quantized to {}px, got {}x{}",
                self.cell, sel.w, sel.h
            )));
        }

        let (bx, by) = (sel.w / self.cell, sel.h / self.cell);
        let cells = (bx * by) as usize;
        if cells == 0 {
            return Ok(());
        }
        let (pair, rotate) = pairing(&self.code, cells);
        let snapshot = buf.get_region(sel)?;

        for here in 0..cells {
            let dst = (here as u32 % bx, here as u32 / bx);
            let partner = pair[here];
            let src = (partner as u32 % bx, partner as u32 / bx);
            copy_cell(buf, &snapshot, sel, self.cell, src, dst);
            if rotate[here] {
                self.transpose_cell(buf, sel, dst);
            }
        }
        Ok(())
    }

    /// Pair map and rotate flags this code produces over `cells` cells.
    /// Pure function of (code, cell count); `pair[pair[c]] == c` holds for
    /// every cell.
    pub fn pairing(&self, cells: usize) -> (Vec<usize>, Vec<bool>) {
        pairing(&self.code, cells)
    }

    // Cells are square by construction (single cell-size constant), so the
    // transpose is a straight (x, y) <-> (y, x) swap within the cell.
    fn transpose_cell(&self, buf: &mut PixelBuffer, sel: Selection, cell: (u32, u32)) {
        let ox = sel.x + cell.0 * self.cell;
        let oy = sel.y + cell.1 * self.cell;
        for cy in 0..self.cell {
            for cx in cy + 1..self.cell {
                let a = buf.offset(ox + cx, oy + cy);
                let b = buf.offset(ox + cy, oy + cx);
                buf.swap_px(a, b);
            }
        }
    }
}

/// Slot table of the CP walk: the code seeds a modular stride over the
/// cell indices, with linear probing (forward on even steps, backward on
/// odd) to resolve collisions. `table[slot]` is the step that landed there.
fn slot_table(code: &[u8], cells: usize) -> Vec<usize> {
    let len = code.len();
    let mut table: Vec<Option<usize>> = vec![None; cells];
    let mut x = cells - 1;
    let mut y = len + cells % len;

    for i in 0..cells {
        x = (CP_KEY[code[i % len] as usize] + x + y) % cells;
        if table[x].is_some() {
            let step = if i % 2 == 0 { 1 } else { cells - 1 };
            while table[x].is_some() {
                x = (x + step) % cells;
            }
        }
        table[x] = Some(i);
        y += 1;
    }

    table.into_iter().map(|slot| slot.unwrap()).collect()
}

/// Symmetric pairing over the slot table: slot i from the front pairs with
/// slot j from the back. Returns the pair map (`pair[pair[c]] == c` for
/// every cell) and the per-cell rotate flags.
fn pairing(code: &[u8], cells: usize) -> (Vec<usize>, Vec<bool>) {
    if cells == 0 {
        return (Vec::new(), Vec::new());
    }
    let table = slot_table(code, cells);
    let mut pair = vec![0usize; cells];
    let mut rotate = vec![false; cells];

    // The upper half mirrors the lower, so only walk to the midpoint; for
    // odd counts the middle slot pairs with itself.
    for i in 0..cells.div_ceil(2) {
        let (a, b) = (table[i], table[cells - 1 - i]);
        pair[a] = b;
        pair[b] = a;
        if (a ^ b) & 1 != 0 {
            rotate[a] = true;
            rotate[b] = true;
        }
    }
    (pair, rotate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_contract_is_enforced() {
        assert!(CpMask::new("HELLO").is_ok());
        assert!(CpMask::new("hello world").is_ok());
        assert!(CpMask::new("").is_err());
        assert!(CpMask::new("   ").is_err());
        assert!(CpMask::new("abc123").is_err());
        assert!(CpMask::new(&"a".repeat(65)).is_err());
        assert!(CpMask::new(&"a".repeat(64)).is_ok());
    }

    #[test]
    fn normalization_strips_spaces_and_uppercases() {
        let a = CpMask::new("a B c").unwrap();
        let b = CpMask::new("ABC").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn slot_table_is_a_bijection() {
        for (code, cells) in [("ABC", 16), ("HELLO", 64), ("Z", 9), ("QWERTY", 100)] {
            let mask = CpMask::new(code).unwrap();
            let table = slot_table(&mask.code, cells);
            let mut sorted = table.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..cells).collect::<Vec<_>>(), "{code}/{cells}");
        }
    }

    #[test]
    fn pairing_is_an_involution() {
        for (code, cells) in [
            ("ABC", 16),
            ("HELLO", 63),
            ("Z", 1),
            ("AB", 2),
            ("MID", 4),
            ("SECRET", 144),
        ] {
            let mask = CpMask::new(code).unwrap();
            let (pair, rotate) = pairing(&mask.code, cells);
            for c in 0..cells {
                assert_eq!(pair[pair[c]], c, "{code}/{cells} cell {c}");
                assert_eq!(rotate[c], rotate[pair[c]], "{code}/{cells} cell {c}");
            }
        }
    }

    #[test]
    fn pairing_is_deterministic() {
        let mask = CpMask::new("HELLO").unwrap();
        assert_eq!(pairing(&mask.code, 48), pairing(&mask.code, 48));
    }

    #[test]
    fn cp_is_self_inverse() {
        let mut buf = PixelBuffer::new(64, 48).unwrap();
        for (i, b) in buf.data.iter_mut().enumerate() {
            *b = (i % 257) as u8;
        }
        let before = buf.clone();
        let sel = Selection::new(16, 16, 48, 32);

        let mask = CpMask::new("My Secret Code").unwrap();
        mask.apply(&mut buf, sel).unwrap();
        assert_ne!(buf, before);
        mask.apply(&mut buf, sel).unwrap();
        assert_eq!(buf, before);
    }

    #[test]
    fn different_codes_scramble_differently() {
        let mut a = PixelBuffer::new(64, 64).unwrap();
        for (i, b) in a.data.iter_mut().enumerate() {
            *b = (i % 253) as u8;
        }
        let mut b = a.clone();
        let sel = Selection::new(0, 0, 64, 64);
        CpMask::new("ALPHA").unwrap().apply(&mut a, sel).unwrap();
        CpMask::new("OMEGA").unwrap().apply(&mut b, sel).unwrap();
        assert_ne!(a, b);
    }
}
