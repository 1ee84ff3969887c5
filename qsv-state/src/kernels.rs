//! Scalar gate-application kernels
//!
//! Free functions over amplitude slices. Every kernel is O(2^n) in the state
//! dimension and touches each affected amplitude pair exactly once.
//!
//! Pair guard: controlled kernels that rewrite both members of an amplitude
//! pair select only indices whose target bit is 0. The partner index (target
//! bit 1) is always strictly greater, so no pair is processed twice. Diagonal
//! kernels (`apply_controlled_phase`) touch single amplitudes and need no
//! guard.

use num_complex::Complex64;

/// Apply a 2×2 gate matrix to `qubit`, writing the result into `dst`
///
/// Out-of-place by design: the caller commits by swapping buffers. Reading and
/// writing the same buffer during the sweep would double-apply updates.
///
/// # Panics
/// Debug-asserts `src.len() == dst.len()`.
pub fn apply_single_qubit(
    src: &[Complex64],
    dst: &mut [Complex64],
    matrix: &[[Complex64; 2]; 2],
    qubit: usize,
) {
    debug_assert_eq!(src.len(), dst.len());

    let mask = 1usize << qubit;
    let m00 = matrix[0][0];
    let m01 = matrix[0][1];
    let m10 = matrix[1][0];
    let m11 = matrix[1][1];

    for i in 0..src.len() {
        if i & mask == 0 {
            let j = i | mask;
            let amp0 = src[i];
            let amp1 = src[j];
            dst[i] = m00 * amp0 + m01 * amp1;
            dst[j] = m10 * amp0 + m11 * amp1;
        }
    }
}

/// Apply a 2×2 gate to `target` on every basis state whose `control_mask`
/// bits are all 1
///
/// Backs the symmetric controlled rotations (`cy`, `crx`, `cry`, `crz`). The
/// pair update reads both amplitudes before writing either, so it is safe in
/// place.
pub fn apply_controlled_u(
    state: &mut [Complex64],
    control_mask: usize,
    target: usize,
    matrix: &[[Complex64; 2]; 2],
) {
    let target_mask = 1usize << target;
    let m00 = matrix[0][0];
    let m01 = matrix[0][1];
    let m10 = matrix[1][0];
    let m11 = matrix[1][1];

    for i in 0..state.len() {
        if i & control_mask == control_mask && i & target_mask == 0 {
            let j = i | target_mask;
            let amp0 = state[i];
            let amp1 = state[j];
            state[i] = m00 * amp0 + m01 * amp1;
            state[j] = m10 * amp0 + m11 * amp1;
        }
    }
}

/// Flip `target` on every basis state whose `control_mask` bits are all 1
///
/// A pure amplitude swap — backs `cx`, `ccx` and `mcx`. An empty mask makes
/// this an unconditional X.
pub fn apply_controlled_x(state: &mut [Complex64], control_mask: usize, target: usize) {
    let target_mask = 1usize << target;

    for i in 0..state.len() {
        if i & control_mask == control_mask && i & target_mask == 0 {
            state.swap(i, i | target_mask);
        }
    }
}

/// Multiply by `phase` every amplitude whose `ones_mask` bits are all 1
///
/// Diagonal update — backs `cz` (mask of two bits, phase −1), `cp` (phase
/// e^{iφ}) and `ccz` (mask of three bits).
pub fn apply_controlled_phase(state: &mut [Complex64], ones_mask: usize, phase: Complex64) {
    for (i, amp) in state.iter_mut().enumerate() {
        if i & ones_mask == ones_mask {
            *amp *= phase;
        }
    }
}

/// Exchange amplitudes between basis states whose bits `a` and `b` differ
pub fn apply_swap(state: &mut [Complex64], a: usize, b: usize) {
    let mask_a = 1usize << a;
    let mask_b = 1usize << b;

    for i in 0..state.len() {
        // Pick the (a=1, b=0) member of each differing pair.
        if i & mask_a != 0 && i & mask_b == 0 {
            state.swap(i, i ^ mask_a ^ mask_b);
        }
    }
}

/// iSWAP: exchange amplitudes between differing-bit states and multiply both
/// by i
pub fn apply_iswap(state: &mut [Complex64], a: usize, b: usize) {
    let mask_a = 1usize << a;
    let mask_b = 1usize << b;
    let phase_i = Complex64::new(0.0, 1.0);

    for i in 0..state.len() {
        if i & mask_a != 0 && i & mask_b == 0 {
            let j = i ^ mask_a ^ mask_b;
            let tmp = state[i];
            state[i] = phase_i * state[j];
            state[j] = phase_i * tmp;
        }
    }
}

/// Controlled SWAP (Fredkin): exchange bits `a` and `b` when `control` is 1
pub fn apply_cswap(state: &mut [Complex64], control: usize, a: usize, b: usize) {
    let mask_c = 1usize << control;
    let mask_a = 1usize << a;
    let mask_b = 1usize << b;

    for i in 0..state.len() {
        if i & mask_c != 0 && i & mask_a != 0 && i & mask_b == 0 {
            state.swap(i, i ^ mask_a ^ mask_b);
        }
    }
}
