/*
    asdapar

    Copyright 2024 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------

    src/swap.rs

    Word swap applied to the max, min and default values of section 0x0006.
*/

/// Exchange the high and low 16-bit halves of a 32-bit value. The transform is its own inverse.
#[inline]
pub fn swap_words(value: u32) -> u32 {
    value.rotate_left(16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_halves() {
        assert_eq!(swap_words(0x1234_5678), 0x5678_1234);
        assert_eq!(swap_words(0x0000_FFFF), 0xFFFF_0000);
        assert_eq!(swap_words(0), 0);
    }

    #[test]
    fn swap_is_an_involution() {
        let samples = [
            0u32,
            1,
            0xFFFF,
            0x1_0000,
            0x8000_0001,
            0xDEAD_BEEF,
            u32::MAX,
            u32::MAX - 1,
        ];
        for x in samples {
            assert_eq!(swap_words(swap_words(x)), x);
        }
        // A coarse sweep over the whole range.
        for x in (0..=u32::MAX).step_by(0x0001_0003) {
            assert_eq!(swap_words(swap_words(x)), x);
        }
    }
}
