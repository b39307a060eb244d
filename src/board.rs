use crate::consts;

/// A board coordinate.  `(0, 0)` is the top-left wall cell; x grows to the
/// right and y grows downwards.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: u16,
    pub(crate) y: u16,
}

impl Point {
    pub(crate) const fn new(x: u16, y: u16) -> Point {
        Point { x, y }
    }
}

/// A glyph placed at a board coordinate
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Cell {
    pub(crate) pos: Point,
    pub(crate) glyph: char,
}

impl Cell {
    pub(crate) const fn new(pos: Point, glyph: char) -> Cell {
        Cell { pos, glyph }
    }
}

/// One drawable entity, tagged at construction as either a single cell
/// (food) or a run of cells (the snake)
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum EntityLayer {
    Single(Cell),
    Multiple(Vec<Cell>),
}

impl EntityLayer {
    fn cells(&self) -> &[Cell] {
        match self {
            EntityLayer::Single(cell) => std::slice::from_ref(cell),
            EntityLayer::Multiple(cells) => cells,
        }
    }
}

/// The playing field: a fixed `width × height` grid whose border cells form
/// the frame wall.
///
/// The background + wall composite is built once at construction; each
/// [`render`][Board::render] starts from that cached layer and only overlays
/// the dynamic entities.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    width: u16,
    height: u16,
    static_cells: Vec<char>,
}

impl Board {
    pub(crate) fn new(width: u16, height: u16) -> Board {
        let mut static_cells =
            vec![consts::BACKGROUND_SYMBOL; usize::from(width) * usize::from(height)];
        for y in 0..height {
            for x in 0..width {
                if x == 0 || x == width - 1 || y == 0 || y == height - 1 {
                    static_cells[usize::from(y) * usize::from(width) + usize::from(x)] =
                        consts::WALL_SYMBOL;
                }
            }
        }
        Board {
            width,
            height,
            static_cells,
        }
    }

    pub(crate) fn width(&self) -> u16 {
        self.width
    }

    pub(crate) fn height(&self) -> u16 {
        self.height
    }

    pub(crate) fn contains(&self, pos: Point) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Is `pos` part of the frame wall?
    pub(crate) fn is_wall(&self, pos: Point) -> bool {
        self.contains(pos)
            && (pos.x == 0 || pos.x == self.width - 1 || pos.y == 0 || pos.y == self.height - 1)
    }

    /// Is `pos` inside the wall, i.e. a legal cell for the snake and food?
    pub(crate) fn is_interior(&self, pos: Point) -> bool {
        self.contains(pos) && !self.is_wall(pos)
    }

    /// Composite `layers` back-to-front over the cached background + wall and
    /// return the board as row-major text: every row gets a left margin and a
    /// trailing newline, and trailing whitespace is trimmed off the end.
    ///
    /// Out-of-bounds cells are ignored.  Identical layers always produce
    /// identical strings.
    pub(crate) fn render(&self, layers: &[EntityLayer]) -> String {
        let mut grid = self.static_cells.clone();
        for layer in layers {
            for cell in layer.cells() {
                if self.contains(cell.pos) {
                    grid[usize::from(cell.pos.y) * usize::from(self.width)
                        + usize::from(cell.pos.x)] = cell.glyph;
                }
            }
        }
        let mut text = String::new();
        for row in grid.chunks(usize::from(self.width)) {
            text.push_str(consts::LEFT_MARGIN);
            text.extend(row);
            text.push('\n');
        }
        let trimmed = text.trim_end().len();
        text.truncate(trimmed);
        text
    }
}
