//! Drawing primitives: lines, circles, rectangles, triangles, bitmaps
//!
//! Everything here is plain integer arithmetic driving [`DrawTarget`]
//! pixel writes. Segments are clipped to the target rectangle before
//! stepping, so streamed targets with no off-screen buffer never see an
//! out-of-range address.

use glam::IVec2;

use super::DrawTarget;

/// Corner selector bits for [`quarter_circle`]
pub const CORNER_NW: u8 = 0x1;
pub const CORNER_NE: u8 = 0x2;
pub const CORNER_SE: u8 = 0x4;
pub const CORNER_SW: u8 = 0x8;

// Cohen-Sutherland outcodes
const OUT_LEFT: u8 = 0x1;
const OUT_RIGHT: u8 = 0x2;
const OUT_BOTTOM: u8 = 0x4;
const OUT_TOP: u8 = 0x8;

fn outcode(p: IVec2, size: IVec2) -> u8 {
    let mut code = 0;
    if p.x < 0 {
        code |= OUT_LEFT;
    } else if p.x >= size.x {
        code |= OUT_RIGHT;
    }
    if p.y < 0 {
        code |= OUT_TOP;
    } else if p.y >= size.y {
        code |= OUT_BOTTOM;
    }
    code
}

/// Clip a segment to `[0, size)` on both axes (Cohen-Sutherland).
///
/// Returns `None` when the segment is entirely outside the rectangle.
pub fn clip_segment(mut p0: IVec2, mut p1: IVec2, size: IVec2) -> Option<(IVec2, IVec2)> {
    if size.x <= 0 || size.y <= 0 {
        return None;
    }
    let (xmax, ymax) = (size.x - 1, size.y - 1);
    let mut code0 = outcode(p0, size);
    let mut code1 = outcode(p1, size);

    loop {
        if code0 | code1 == 0 {
            return Some((p0, p1));
        }
        if code0 & code1 != 0 {
            return None;
        }

        // Pick an endpoint outside and pull it onto the crossed edge.
        // Intermediates widened: products of screen-scale deltas stay exact.
        let out = if code0 != 0 { code0 } else { code1 };
        let (dx, dy) = ((p1.x - p0.x) as i64, (p1.y - p0.y) as i64);
        let p = if out & OUT_TOP != 0 {
            IVec2::new(p0.x + (dx * (0 - p0.y) as i64 / dy) as i32, 0)
        } else if out & OUT_BOTTOM != 0 {
            IVec2::new(p0.x + (dx * (ymax - p0.y) as i64 / dy) as i32, ymax)
        } else if out & OUT_RIGHT != 0 {
            IVec2::new(xmax, p0.y + (dy * (xmax - p0.x) as i64 / dx) as i32)
        } else {
            IVec2::new(0, p0.y + (dy * (0 - p0.x) as i64 / dx) as i32)
        };

        if out == code0 {
            p0 = p;
            code0 = outcode(p0, size);
        } else {
            p1 = p;
            code1 = outcode(p1, size);
        }
    }
}

/// Draw a line with Bresenham's algorithm.
///
/// Steep lines (|dy| > |dx|) are transposed so the major axis always steps
/// left to right, guaranteeing exactly one pixel per unit step.
pub fn line<T: DrawTarget>(target: &mut T, p0: IVec2, p1: IVec2, color: T::Color) {
    let Some((p0, p1)) = clip_segment(p0, p1, target.size()) else {
        return;
    };
    let (mut x0, mut y0) = (p0.x, p0.y);
    let (mut x1, mut y1) = (p1.x, p1.y);

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = (y1 - y0).abs();
    let mut err = dx / 2;
    let y_step = if y0 < y1 { 1 } else { -1 };

    while x0 <= x1 {
        if steep {
            target.set_pixel(IVec2::new(y0, x0), color);
        } else {
            target.set_pixel(IVec2::new(x0, y0), color);
        }
        err -= dy;
        if err < 0 {
            y0 += y_step;
            err += dx;
        }
        x0 += 1;
    }
}

/// Vertical line of `height` pixels starting at `start`
pub fn vline<T: DrawTarget>(target: &mut T, start: IVec2, height: i32, color: T::Color) {
    if height <= 0 {
        return;
    }
    line(target, start, IVec2::new(start.x, start.y + height - 1), color);
}

/// Horizontal line of `width` pixels starting at `start`
pub fn hline<T: DrawTarget>(target: &mut T, start: IVec2, width: i32, color: T::Color) {
    if width <= 0 {
        return;
    }
    line(target, start, IVec2::new(start.x + width - 1, start.y), color);
}

/// Rectangle outline between two resolved corners
pub fn rect<T: DrawTarget>(target: &mut T, top_left: IVec2, bottom_right: IVec2, color: T::Color) {
    let (tl, br) = normalize_corners(top_left, bottom_right);
    line(target, tl, IVec2::new(br.x, tl.y), color);
    line(target, IVec2::new(br.x, tl.y), br, color);
    line(target, br, IVec2::new(tl.x, br.y), color);
    line(target, IVec2::new(tl.x, br.y), tl, color);
}

/// Filled rectangle between two resolved corners
pub fn filled_rect<T: DrawTarget>(
    target: &mut T,
    top_left: IVec2,
    bottom_right: IVec2,
    color: T::Color,
) {
    let (tl, br) = normalize_corners(top_left, bottom_right);
    for x in tl.x..=br.x {
        line(target, IVec2::new(x, tl.y), IVec2::new(x, br.y), color);
    }
}

fn normalize_corners(a: IVec2, b: IVec2) -> (IVec2, IVec2) {
    (a.min(b), a.max(b))
}

/// Circle outline using the midpoint algorithm with 8-way octant symmetry
pub fn circle<T: DrawTarget>(target: &mut T, center: IVec2, radius: i32, color: T::Color) {
    if radius <= 0 {
        target.set_pixel(center, color);
        return;
    }
    let (cx, cy) = (center.x, center.y);
    let mut decision = 1 - radius;
    let mut ddx = 1;
    let mut ddy = -2 * radius;
    let mut x = 0;
    let mut y = radius;

    // Cardinal points first, then one computed octant mirrored 8 ways
    target.set_pixel(IVec2::new(cx, cy + radius), color);
    target.set_pixel(IVec2::new(cx, cy - radius), color);
    target.set_pixel(IVec2::new(cx + radius, cy), color);
    target.set_pixel(IVec2::new(cx - radius, cy), color);

    while x < y {
        if decision >= 0 {
            y -= 1;
            ddy += 2;
            decision += ddy;
        }
        x += 1;
        ddx += 2;
        decision += ddx;

        target.set_pixel(IVec2::new(cx + x, cy + y), color);
        target.set_pixel(IVec2::new(cx - x, cy + y), color);
        target.set_pixel(IVec2::new(cx + x, cy - y), color);
        target.set_pixel(IVec2::new(cx - x, cy - y), color);
        target.set_pixel(IVec2::new(cx + y, cy + x), color);
        target.set_pixel(IVec2::new(cx - y, cy + x), color);
        target.set_pixel(IVec2::new(cx + y, cy - x), color);
        target.set_pixel(IVec2::new(cx - y, cy - x), color);
    }
}

/// Quarter-circle arcs selected by a corner bitmask ([`CORNER_NW`] etc.),
/// same midpoint loop as [`circle`] restricted to the chosen octant pairs
pub fn quarter_circle<T: DrawTarget>(
    target: &mut T,
    center: IVec2,
    radius: i32,
    corners: u8,
    color: T::Color,
) {
    if radius <= 0 {
        return;
    }
    let (cx, cy) = (center.x, center.y);
    let mut decision = 1 - radius;
    let mut ddx = 1;
    let mut ddy = -2 * radius;
    let mut x = 0;
    let mut y = radius;

    while x < y {
        if decision >= 0 {
            y -= 1;
            ddy += 2;
            decision += ddy;
        }
        x += 1;
        ddx += 2;
        decision += ddx;

        if corners & CORNER_SE != 0 {
            target.set_pixel(IVec2::new(cx + x, cy + y), color);
            target.set_pixel(IVec2::new(cx + y, cy + x), color);
        }
        if corners & CORNER_NE != 0 {
            target.set_pixel(IVec2::new(cx + x, cy - y), color);
            target.set_pixel(IVec2::new(cx + y, cy - x), color);
        }
        if corners & CORNER_SW != 0 {
            target.set_pixel(IVec2::new(cx - y, cy + x), color);
            target.set_pixel(IVec2::new(cx - x, cy + y), color);
        }
        if corners & CORNER_NW != 0 {
            target.set_pixel(IVec2::new(cx - y, cy - x), color);
            target.set_pixel(IVec2::new(cx - x, cy - y), color);
        }
    }
}

/// Fill the left/right half-discs with vertical spans.
///
/// `corners` bit 0 selects the right half, bit 1 the left half; `delta`
/// stretches spans for stadium shapes. The `x < y + 1` / `y != prev_y`
/// guards keep every column drawn exactly once, which is what makes
/// Invert-mode fills safe. Do not simplify them.
fn fill_circle_spans<T: DrawTarget>(
    target: &mut T,
    center: IVec2,
    radius: i32,
    corners: u8,
    delta: i32,
    color: T::Color,
) {
    let (cx, cy) = (center.x, center.y);
    let mut decision = 1 - radius;
    let mut ddx = 1;
    let mut ddy = -2 * radius;
    let mut x = 0;
    let mut y = radius;
    let mut prev_x = x;
    let mut prev_y = y;
    let delta = delta + 1;

    while x < y {
        if decision >= 0 {
            y -= 1;
            ddy += 2;
            decision += ddy;
        }
        x += 1;
        ddx += 2;
        decision += ddx;

        if x < y + 1 {
            if corners & 1 != 0 {
                vline(target, IVec2::new(cx + x, cy - y), 2 * y + delta, color);
            }
            if corners & 2 != 0 {
                vline(target, IVec2::new(cx - x, cy - y), 2 * y + delta, color);
            }
        }
        if y != prev_y {
            if corners & 1 != 0 {
                vline(target, IVec2::new(cx + prev_y, cy - prev_x), 2 * prev_x + delta, color);
            }
            if corners & 2 != 0 {
                vline(target, IVec2::new(cx - prev_y, cy - prev_x), 2 * prev_x + delta, color);
            }
            prev_y = y;
        }
        prev_x = x;
    }
}

/// Filled circle: center column plus mirrored span fills
pub fn filled_circle<T: DrawTarget>(target: &mut T, center: IVec2, radius: i32, color: T::Color) {
    if radius <= 0 {
        target.set_pixel(center, color);
        return;
    }
    vline(
        target,
        IVec2::new(center.x, center.y - radius),
        2 * radius + 1,
        color,
    );
    fill_circle_spans(target, center, radius, 3, 0, color);
}

/// Triangle outline
pub fn triangle<T: DrawTarget>(target: &mut T, a: IVec2, b: IVec2, c: IVec2, color: T::Color) {
    line(target, a, b, color);
    line(target, b, c, color);
    line(target, c, a, color);
}

/// Filled triangle via horizontal scanline spans
pub fn filled_triangle<T: DrawTarget>(
    target: &mut T,
    a: IVec2,
    b: IVec2,
    c: IVec2,
    color: T::Color,
) {
    // Sort vertices by y so a.y <= b.y <= c.y
    let (mut a, mut b, mut c) = (a, b, c);
    if a.y > b.y {
        std::mem::swap(&mut a, &mut b);
    }
    if b.y > c.y {
        std::mem::swap(&mut b, &mut c);
    }
    if a.y > b.y {
        std::mem::swap(&mut a, &mut b);
    }

    if a.y == c.y {
        // All vertices on one scanline: single span between x extremes
        let lo = a.x.min(b.x).min(c.x);
        let hi = a.x.max(b.x).max(c.x);
        hline(target, IVec2::new(lo, a.y), hi - lo + 1, color);
        return;
    }

    let (dx01, dy01) = ((b.x - a.x) as i64, (b.y - a.y) as i64);
    let (dx02, dy02) = ((c.x - a.x) as i64, (c.y - a.y) as i64);
    let (dx12, dy12) = ((c.x - b.x) as i64, (c.y - b.y) as i64);
    let mut sa: i64 = 0;
    let mut sb: i64 = 0;

    // Upper part: spans between edges a-b and a-c. A flat-bottomed triangle
    // includes scanline b.y here so the second loop (and its /0) is skipped;
    // otherwise b.y is handled below, which likewise protects a flat top.
    let last = if b.y == c.y { b.y } else { b.y - 1 };

    let mut y = a.y;
    while y <= last {
        let mut xa = a.x + (sa / dy01) as i32;
        let mut xb = a.x + (sb / dy02) as i32;
        sa += dx01;
        sb += dx02;
        if xa > xb {
            std::mem::swap(&mut xa, &mut xb);
        }
        hline(target, IVec2::new(xa, y), xb - xa + 1, color);
        y += 1;
    }

    // Lower part: spans between edges b-c and a-c
    sa = dx12 * (y - b.y) as i64;
    sb = dx02 * (y - a.y) as i64;
    while y <= c.y {
        let mut xa = b.x + (sa / dy12) as i32;
        let mut xb = a.x + (sb / dy02) as i32;
        sa += dx12;
        sb += dx02;
        if xa > xb {
            std::mem::swap(&mut xa, &mut xb);
        }
        hline(target, IVec2::new(xa, y), xb - xa + 1, color);
        y += 1;
    }
}

/// Blit a packed 1-bit-per-pixel bitmap, MSB first, rows byte-aligned
pub fn bitmap<T: DrawTarget>(
    target: &mut T,
    pos: IVec2,
    bits: &[u8],
    width: i32,
    height: i32,
    color: T::Color,
) {
    if width <= 0 || height <= 0 {
        return;
    }
    let byte_width = ((width + 7) / 8) as usize;
    let mut current = 0u8;

    for row in 0..height {
        for col in 0..width {
            if col & 7 != 0 {
                current <<= 1;
            } else {
                let idx = row as usize * byte_width + (col / 8) as usize;
                current = bits.get(idx).copied().unwrap_or(0);
            }
            if current & 0x80 != 0 {
                target.set_pixel(IVec2::new(pos.x + col, pos.y + row), color);
            }
        }
    }
}
