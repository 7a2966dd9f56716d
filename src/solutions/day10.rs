use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use aoc_lattice::geometry::{interior_points, shoelace_area};
use aoc_lattice::{
    BreadthFirst, Connectivity, Coordinate, DepthFirst, Direction, Graph, Grid, LatticeGraph,
    VertexId,
};
use log::debug;

#[solution_runner(
    name = "Day 10: Pipe Maze",
    parsed = PipeMaze,
    part_one = Day10,
    part_two = Day10
)]
impl super::AdventOfCode2023<10> {}

/*
Input is a grid of pipes and an animal that enters the pipes.

Various characters are used for representation:

- `.` is a space clear of anything relevant.
- `|` and `-` are straight pipes connecting north-south and east-west respectively.
- `L`, `J`, `7`, `F` are 90 degree bends connecting north-east, north-west, south-west, and
  south-east respectively.
- `S` marks where the animal starts, on a pipe of unknown shape.

The grid becomes a lattice graph where an edge survives only between two cells whose pipes both
reach toward each other.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pipe {
    Ground,
    Start,
    Vertical,
    Horizontal,
    UpRight,
    UpLeft,
    DownLeft,
    DownRight,
}

#[derive(thiserror::Error, Debug)]
#[error("character is invalid for a pipe: {0:?}")]
struct InvalidPipe(char);

impl TryFrom<char> for Pipe {
    type Error = InvalidPipe;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(Self::Ground),
            'S' => Ok(Self::Start),
            '|' => Ok(Self::Vertical),
            '-' => Ok(Self::Horizontal),
            'L' => Ok(Self::UpRight),
            'J' => Ok(Self::UpLeft),
            '7' => Ok(Self::DownLeft),
            'F' => Ok(Self::DownRight),
            _ => Err(InvalidPipe(value)),
        }
    }
}

impl Pipe {
    /// Whether the pipe has an opening toward `direction`. The start may open any way.
    fn opens(self, direction: Direction) -> bool {
        use Direction::{Down, Left, Right, Up};

        match self {
            Self::Ground => false,
            Self::Start => true,
            Self::Vertical => matches!(direction, Up | Down),
            Self::Horizontal => matches!(direction, Left | Right),
            Self::UpRight => matches!(direction, Up | Right),
            Self::UpLeft => matches!(direction, Up | Left),
            Self::DownLeft => matches!(direction, Down | Left),
            Self::DownRight => matches!(direction, Down | Right),
        }
    }
}

struct PipeMaze {
    graph: LatticeGraph<Pipe>,
    start: VertexId,
}

#[derive(thiserror::Error, Debug)]
enum ParsePipeMazeError {
    #[error("detected a second start after first (at {first}): {second}")]
    SecondStart {
        first: Coordinate,
        second: Coordinate,
    },

    #[error("input is missing a start")]
    MissingStart,

    #[error("start at {start} must join exactly 2 pipes, found {found}")]
    StartNotOnLoop { start: Coordinate, found: usize },
}

impl ParseData for PipeMaze {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let grid: Grid<Pipe> = input
            .parse::<Grid<char>>()?
            .try_map_nodes(|node| Pipe::try_from(*node.value()))?;

        let mut starts = grid.filter(|pipe| *pipe == Pipe::Start).into_iter();
        let start_coordinate = starts
            .next()
            .ok_or(ParsePipeMazeError::MissingStart)?
            .coordinate();
        if let Some(second) = starts.next() {
            return Err(ParsePipeMazeError::SecondStart {
                first: start_coordinate,
                second: second.coordinate(),
            }
            .into());
        }

        let mut graph = LatticeGraph::from_grid(&grid, Connectivity::Cardinal);
        let disconnected = disconnected_edges(&graph);
        debug!("pruning {} edges between pipes that don't meet", disconnected.len());
        for (first, second) in disconnected {
            graph.remove_edge(first, second);
        }

        let start = graph
            .vertex_at(start_coordinate)
            .ok_or(ParsePipeMazeError::MissingStart)?;
        let found = graph.neighbors(start).len();
        if found != 2 {
            return Err(ParsePipeMazeError::StartNotOnLoop {
                start: start_coordinate,
                found,
            }
            .into());
        }

        Ok(Self { graph, start })
    }
}

/// Collect the edges of a freshly built lattice whose two pipes don't both open toward each other.
fn disconnected_edges(graph: &LatticeGraph<Pipe>) -> Vec<(VertexId, VertexId)> {
    let pipe = |id| graph.vertex(id).map(|vertex| *vertex.value());

    let mut edges = Vec::new();
    for id in graph.iter() {
        for neighbor in graph.neighbors(id) {
            // each edge is seen from both ends, so only judge it from the lower id
            if neighbor < id {
                continue;
            }
            let joined = graph
                .direction(id, neighbor)
                .zip(pipe(id).zip(pipe(neighbor)))
                .is_some_and(|(direction, (from, to))| {
                    from.opens(direction) && to.opens(direction.opposite())
                });
            if !joined {
                edges.push((id, neighbor));
            }
        }
    }
    edges
}

/*
It is implied the animal's start also acts as one of the supported pipe variants, forming a closed
loop.

For part 1, determine the farthest grid cell for the animal to reach when following the pipe loop,
then return the number of steps to reach that cell.
*/

struct Day10;

impl Solution<PartOne> for Day10 {
    type Input = PipeMaze;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut walk = BreadthFirst::new(&input.graph, input.start);
        let farthest = walk.by_ref().last().unwrap_or(input.start);
        Ok(walk.distance(farthest).unwrap_or_default())
    }
}

/*
For part 2, determine the number of cells enclosed by the pipe loop.

Walking the loop depth-first visits its cells in order around the loop, so their coordinates form
the polygon's boundary. The shoelace formula gives the polygon's area, and Pick's theorem turns
that area and the boundary length into the count of enclosed cells.
*/

#[derive(thiserror::Error, Debug)]
#[error("the pipe loop's area overflowed")]
struct LoopAreaOverflow;

impl Solution<PartTwo> for Day10 {
    type Input = PipeMaze;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let boundary: Vec<Coordinate> = DepthFirst::new(&input.graph, input.start)
            .filter_map(|id| input.graph.coordinates(id))
            .collect();
        debug!("pipe loop has {} cells", boundary.len());

        let area = shoelace_area(&boundary).ok_or(LoopAreaOverflow)?;
        let boundary_len = u64::try_from(boundary.len())?;
        Ok(interior_points(area, boundary_len).ok_or(LoopAreaOverflow)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT_ONE: &str = r"7-F7-
.FJ|7
SJLL7
|F--J
LJ.LJ
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = PipeMaze::parse(EXAMPLE_INPUT_ONE)?;
        let result = <Day10 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 8);
        Ok(())
    }

    const SQUARE_LOOP: &str = r".....
.S-7.
.|.|.
.L-J.
.....
";

    #[test]
    fn square_loop_encloses_one_cell() -> DynamicResult<()> {
        let parsed = PipeMaze::parse(SQUARE_LOOP)?;
        assert_eq!(<Day10 as Solution<PartOne>>::solve(&parsed)?, 4);
        assert_eq!(<Day10 as Solution<PartTwo>>::solve(&parsed)?, 1);
        Ok(())
    }

    const EXAMPLE_INPUT_TWO: &str = r".F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
";

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = PipeMaze::parse(EXAMPLE_INPUT_TWO)?;
        let result = <Day10 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 8);
        Ok(())
    }

    #[test]
    fn pruning_keeps_only_joined_pipes() -> DynamicResult<()> {
        let parsed = PipeMaze::parse(SQUARE_LOOP)?;
        // eight loop cells joined in a ring
        assert_eq!(parsed.graph.edge_count(), 8);
        let corner = parsed
            .graph
            .vertex_at(Coordinate::new(3, 1))
            .ok_or("corner should exist")?;
        assert_eq!(parsed.graph.neighbors(corner).len(), 2);
        Ok(())
    }

    #[test]
    fn start_errors() {
        assert!(PipeMaze::parse("...\n.F.\n...").is_err());
        assert!(PipeMaze::parse("S-S\n").is_err());
        assert!(PipeMaze::parse(".S.\n...").is_err());
        assert!(PipeMaze::parse("S-7\n|.X\nL-J").is_err());
    }
}
