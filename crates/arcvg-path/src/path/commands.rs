use arcvg_core::math::{point, Point};

const INIT_COMMANDS_SIZE: usize = 256;

const POINT_SIZE: usize = 16;

/// One recorded path instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    MoveTo(Point),
    LineTo(Point),
    CurveTo {
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    Close,
}

impl Command {
    /// The point the pen rests on after this command, if it moves the pen.
    pub fn end_point(&self) -> Option<Point> {
        match self {
            Self::MoveTo(p) | Self::LineTo(p) => Some(*p),
            Self::CurveTo { to, .. } => Some(*to),
            Self::Close => None,
        }
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandType {
    MoveTo = 0,
    LineTo,
    CurveTo,
    Close,
}

impl CommandType {
    fn from_u8(c: u8) -> Option<Self> {
        match c {
            0 => Some(Self::MoveTo),
            1 => Some(Self::LineTo),
            2 => Some(Self::CurveTo),
            3 => Some(Self::Close),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct PackedCommandBuffer {
    data: Vec<u8>,
    len: usize,
}

impl PackedCommandBuffer {
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(INIT_COMMANDS_SIZE),
            len: 0,
        }
    }

    fn push_point(&mut self, p: Point) {
        self.data.extend_from_slice(&p.x.to_ne_bytes());
        self.data.extend_from_slice(&p.y.to_ne_bytes());
    }

    pub fn move_to(&mut self, to: Point) {
        self.data.reserve(1 + POINT_SIZE);
        self.data.push(CommandType::MoveTo as u8);
        self.push_point(to);
        self.len += 1;
    }

    pub fn line_to(&mut self, to: Point) {
        self.data.reserve(1 + POINT_SIZE);
        self.data.push(CommandType::LineTo as u8);
        self.push_point(to);
        self.len += 1;
    }

    pub fn curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.data.reserve(1 + POINT_SIZE * 3);
        self.data.push(CommandType::CurveTo as u8);
        self.push_point(ctrl1);
        self.push_point(ctrl2);
        self.push_point(to);
        self.len += 1;
    }

    pub fn close(&mut self) {
        self.data.push(CommandType::Close as u8);
        self.len += 1;
    }

    pub fn push(&mut self, command: Command) {
        match command {
            Command::MoveTo(p) => self.move_to(p),
            Command::LineTo(p) => self.line_to(p),
            Command::CurveTo { ctrl1, ctrl2, to } => self.curve_to(ctrl1, ctrl2, to),
            Command::Close => self.close(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn iter(&self) -> CommandIter<'_> {
        CommandIter {
            data: &self.data,
            curr: 0,
        }
    }
}

/// An iterator over the commands of a [`Path`](crate::Path).
#[derive(Debug, Clone)]
pub struct CommandIter<'a> {
    data: &'a [u8],
    curr: usize,
}

impl<'a> CommandIter<'a> {
    fn read_point(&mut self) -> Option<Point> {
        let b = self.data.get(self.curr..self.curr + POINT_SIZE)?;
        let (x, y) = b.split_at(8);
        let x = f64::from_ne_bytes(x.try_into().ok()?);
        let y = f64::from_ne_bytes(y.try_into().ok()?);
        self.curr += POINT_SIZE;
        Some(point(x, y))
    }
}

impl<'a> Iterator for CommandIter<'a> {
    type Item = Command;

    fn next(&mut self) -> Option<Self::Item> {
        let cmd_byte = self.data.get(self.curr).copied()?;
        let cmd_type = CommandType::from_u8(cmd_byte)?;

        self.curr += 1;

        Some(match cmd_type {
            CommandType::MoveTo => Command::MoveTo(self.read_point()?),
            CommandType::LineTo => Command::LineTo(self.read_point()?),
            CommandType::CurveTo => {
                let ctrl1 = self.read_point()?;
                let ctrl2 = self.read_point()?;
                let to = self.read_point()?;
                Command::CurveTo { ctrl1, ctrl2, to }
            }
            CommandType::Close => Command::Close,
        })
    }
}
