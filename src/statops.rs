// Copyright (c) 2018 Ministerio de Fomento
//                    Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>,
//            Daniel Jiménez González <dani@ietcc.csic.es>

// -----------------------------------------------------------------------------------
// Statistical utilities
// -----------------------------------------------------------------------------------

use num::Float;
use std;

// // Sum all elements in a vector
pub fn vecsum<'a, T>(vec: &'a [T]) -> T
where
    T: Float + std::iter::Sum<&'a T>,
{
    vec.iter().sum()
}

// // Quantile q (0 <= q <= 1) of sorted values, with linear interpolation
pub fn quantile<T: Float>(sorted: &[T], q: T) -> T {
    if sorted.is_empty() {
        return T::nan();
    }
    let pos = q * T::from(sorted.len() - 1).unwrap_or_else(T::zero);
    let base = pos.floor();
    let rest = pos - base;
    let idx = base.to_usize().unwrap_or(0);
    match sorted.get(idx + 1) {
        Some(next) => sorted[idx] + rest * (*next - sorted[idx]),
        None => sorted[idx],
    }
}

// // Counts per right-closed bin (lo, hi]. Values out of range are dropped
pub fn bincounts<T: Float>(values: &[T], edges: &[T]) -> Vec<usize> {
    let nbins = edges.len().saturating_sub(1);
    let mut counts = vec![0_usize; nbins];
    for v in values {
        for ii in 0..nbins {
            if *v > edges[ii] && *v <= edges[ii + 1] {
                counts[ii] += 1;
                break;
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statops_vecsum() {
        assert_eq!(9.0, vecsum(&[2.0, 3.0, 4.0]));
        assert_eq!(0.0, vecsum::<f64>(&[]));
    }

    #[test]
    fn statops_quantile() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(1.75, quantile(&values, 0.25));
        assert_eq!(2.5, quantile(&values, 0.5));
        assert_eq!(3.25, quantile(&values, 0.75));
        assert_eq!(1.0, quantile(&values, 0.0));
        assert_eq!(4.0, quantile(&values, 1.0));
        assert_eq!(7.0, quantile(&[7.0], 0.5));
        assert!(quantile::<f64>(&[], 0.5).is_nan());
    }

    #[test]
    fn statops_bincounts() {
        let edges = [0.0, 10.0, 20.0, 30.0];
        // los intervalos son abiertos por la izquierda: 10.0 cae en el primero
        assert_eq!(
            vec![2, 1, 0],
            bincounts(&[5.0, 10.0, 15.0, 0.0, 31.0], &edges)
        );
    }
}
