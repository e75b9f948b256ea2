//! Integration tests for the threaded pathfinding service over painted terrain.

use loam::{
    GridPoint, LoamResult, PathRequest, RequestService, SearchArea, SharedArea, TerrainCanvas,
    TerrainType,
};
use std::sync::Arc;

/// Search area backed by painted layer masks: water blocks movement and
/// roads cancel the open-ground penalty.
struct PaintedArea {
    masks: Vec<u16>,
    cols: i32,
    rows: i32,
}

impl PaintedArea {
    fn from_canvas(canvas: &TerrainCanvas) -> Self {
        Self {
            masks: canvas.masks().grid().as_slice().to_vec(),
            cols: canvas.cols() as i32,
            rows: canvas.rows() as i32,
        }
    }

    fn mask(&self, x: i32, y: i32) -> u16 {
        self.masks[(y * self.cols + x) as usize]
    }
}

impl SearchArea for PaintedArea {
    fn traversable(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.cols || y < 0 || y >= self.rows {
            return false;
        }
        !TerrainType::is_water(self.mask(x, y))
    }

    fn movement_penalty(&self, x: i32, y: i32) -> i32 {
        if TerrainType::is_road(self.mask(x, y)) {
            0
        } else {
            6
        }
    }

    fn area_size(&self) -> usize {
        (self.cols * self.rows) as usize
    }
}

fn canvas(cols: usize, rows: usize) -> TerrainCanvas {
    let mut canvas = TerrainCanvas::new(cols, rows);
    canvas.set_brush_radius(0.0);
    canvas
}

#[test]
fn test_path_crosses_water_only_at_the_gap() -> LoamResult<()> {
    // a vertical river at x = 8 with a single gap at y = 10
    let mut canvas = canvas(16, 16);
    canvas.set_terrain_type(TerrainType::Water);
    canvas.draw_line(8, 0, 8, 9);
    canvas.draw_line(8, 11, 8, 15);

    let area: SharedArea = Arc::new(PaintedArea::from_canvas(&canvas));
    let service = RequestService::new(2);
    let request = PathRequest::new(GridPoint::new(2, 2), GridPoint::new(14, 2));
    let result = service.submit(request.with_collapse(false), Arc::clone(&area)).wait();

    assert!(result.is_found());
    let crossings: Vec<&GridPoint> = result.path().iter().filter(|p| p.x == 8).collect();
    assert_eq!(crossings.len(), 1);
    assert_eq!(crossings[0].y, 10);
    Ok(())
}

#[test]
fn test_sealed_target_resolves_as_not_found() {
    // target island fully enclosed by water
    let mut canvas = canvas(12, 12);
    canvas.set_terrain_type(TerrainType::Water);
    canvas.draw_rectangle(4, 4, 8, 4);
    canvas.draw_rectangle(4, 8, 8, 8);
    canvas.draw_rectangle(4, 4, 4, 8);
    canvas.draw_rectangle(8, 4, 8, 8);

    let area = Arc::new(PaintedArea::from_canvas(&canvas));
    let service = RequestService::new(1);
    let ticket = service.submit_points(GridPoint::new(0, 0), GridPoint::new(6, 6), area);
    assert!(!ticket.wait().is_found());
}

#[test]
fn test_roads_divert_the_path() {
    // a road running along y = 0 between the endpoints; open ground costs
    // more, so the path should hug the road rather than cut straight
    let mut canvas = canvas(24, 8);
    canvas.set_terrain_type(TerrainType::Road);
    canvas.draw_line(0, 0, 23, 0);

    let area = Arc::new(PaintedArea::from_canvas(&canvas));
    let request = PathRequest::new(GridPoint::new(0, 2), GridPoint::new(23, 2)).with_collapse(false);
    let result = RequestService::handle_direct(&request, area.as_ref());

    assert!(result.is_found());
    let on_road = result.path().iter().filter(|p| p.y == 0).count();
    assert!(on_road > result.path().len() / 2);
}

#[test]
fn test_collapsed_paths_keep_only_turning_points() {
    let empty = canvas(16, 16);
    let area: SharedArea = Arc::new(PaintedArea::from_canvas(&empty));
    let service = RequestService::new(1);

    let straight = service
        .submit(
            PathRequest::new(GridPoint::new(0, 3), GridPoint::new(12, 3)),
            Arc::clone(&area),
        )
        .wait();
    assert!(straight.is_found());
    // one straight segment collapses to its endpoint
    assert_eq!(straight.path(), &[GridPoint::new(12, 3)]);

    let full = service
        .submit(
            PathRequest::new(GridPoint::new(0, 3), GridPoint::new(12, 3)).with_collapse(false),
            area,
        )
        .wait();
    assert_eq!(full.path().len(), 12);
}

#[test]
fn test_many_prioritized_requests_all_resolve() {
    let empty = canvas(32, 32);
    let area: SharedArea = Arc::new(PaintedArea::from_canvas(&empty));
    let service = RequestService::new(4);

    let tickets: Vec<_> = (0..48)
        .map(|i| {
            let request = PathRequest::new(
                GridPoint::new(i % 32, 0),
                GridPoint::new(31 - (i % 32), 31),
            )
            .with_priority(i % 5);
            service.submit(request, Arc::clone(&area))
        })
        .collect();

    for ticket in tickets {
        let result = ticket.wait();
        assert!(result.is_found());
        assert_eq!(result.path().last().map(|p| p.y), Some(31));
    }
    assert_eq!(service.pending(), 0);
}

#[test]
fn test_service_matches_direct_search() {
    let mut canvas = canvas(16, 16);
    canvas.set_terrain_type(TerrainType::Water);
    canvas.draw_rectangle(5, 5, 10, 10);

    let area = Arc::new(PaintedArea::from_canvas(&canvas));
    let request = PathRequest::new(GridPoint::new(0, 0), GridPoint::new(15, 15));

    let direct = RequestService::handle_direct(&request, area.as_ref());
    let service = RequestService::new(1);
    let threaded = service.submit(request, area).wait();

    assert_eq!(direct.is_found(), threaded.is_found());
    assert_eq!(direct.path(), threaded.path());
}
