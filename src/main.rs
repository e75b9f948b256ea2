//! # Loam Terrain Demo
//!
//! Paints noise-seeded terrain layers with the mouse and runs threaded
//! path requests across the painted map. Left mouse paints the selected
//! layer, right mouse picks a start and a target for pathfinding.

use clap::Parser;
use log::info;
use macroquad::prelude::*;
use std::sync::Arc;

use loam::{
    Application, Engine, FbmNoise, GridPoint, Keyboard, LoamError, LoamResult, MapSize, Mouse,
    NoiseMap, PathRequest, PathTicket, RequestService, SearchArea, TerrainQuadTree, TerrainShaper,
    TerrainType, WindowConfig,
};

/// Command line arguments for the terrain demo.
#[derive(Parser, Debug)]
#[command(name = "loam")]
#[command(about = "Terrain painting and pathfinding demo")]
#[command(version)]
struct Args {
    /// Random seed for the initial terrain
    #[arg(short, long)]
    seed: Option<u32>,

    /// Map size (tiny, small, medium, large, huge, gargantuan)
    #[arg(short, long, default_value = "tiny")]
    map_size: String,

    /// Pathfinder worker threads
    #[arg(short, long, default_value_t = 2)]
    threads: usize,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_map_size(name: &str) -> LoamResult<MapSize> {
    match name.to_lowercase().as_str() {
        "tiny" => Ok(MapSize::Tiny),
        "small" => Ok(MapSize::Small),
        "medium" => Ok(MapSize::Medium),
        "large" => Ok(MapSize::Large),
        "huge" => Ok(MapSize::Huge),
        "gargantuan" => Ok(MapSize::Gargantuan),
        other => Err(LoamError::InvalidInput(format!(
            "Unknown map size: {}",
            other
        ))),
    }
}

/// Search area over a snapshot of the painted layer masks. Water blocks;
/// roads are cheaper than open ground.
struct TerrainArea {
    masks: Vec<u16>,
    tiles: i32,
}

impl TerrainArea {
    fn snapshot(shaper: &mut TerrainShaper) -> Self {
        let canvas = shaper.canvas();
        let tiles = canvas.cols() as i32;
        Self {
            masks: canvas.masks().grid().as_slice().to_vec(),
            tiles,
        }
    }

    fn mask(&self, x: i32, y: i32) -> u16 {
        self.masks[(y * self.tiles + x) as usize]
    }
}

impl SearchArea for TerrainArea {
    fn traversable(&self, x: i32, y: i32) -> bool {
        if x < 0 || x > self.tiles - 1 || y < 0 || y > self.tiles - 1 {
            return false;
        }
        !TerrainType::is_water(self.mask(x, y))
    }

    fn movement_penalty(&self, x: i32, y: i32) -> i32 {
        if TerrainType::is_road(self.mask(x, y)) {
            0
        } else {
            4
        }
    }

    fn area_size(&self) -> usize {
        (self.tiles * self.tiles) as usize
    }
}

struct TerrainDemo {
    args: Args,
    map_size: MapSize,
    shaper: TerrainShaper,
    quad_tree: TerrainQuadTree,
    service: RequestService,
    layer: TerrainType,
    clearing: bool,
    stroke_from: Option<GridPoint>,
    path_start: Option<GridPoint>,
    ticket: Option<PathTicket>,
    path: Vec<GridPoint>,
    quit: bool,
}

impl TerrainDemo {
    fn new(args: Args) -> LoamResult<Self> {
        let map_size = parse_map_size(&args.map_size)?;
        let threads = args.threads;
        Ok(Self {
            args,
            map_size,
            shaper: TerrainShaper::new(map_size),
            quad_tree: TerrainQuadTree::new(map_size),
            service: RequestService::new(threads),
            layer: TerrainType::Dirt,
            clearing: false,
            stroke_from: None,
            path_start: None,
            ticket: None,
            path: Vec::new(),
            quit: false,
        })
    }

    fn tile_px(&self) -> f32 {
        let tiles = self.map_size.tiles() as f32;
        (screen_width() / tiles).min(screen_height() / tiles)
    }

    // Screen pixels to tile coordinates; rows count up from the bottom.
    fn tile_at(&self, px: f32, py: f32) -> GridPoint {
        let scale = self.tile_px();
        let tiles = self.map_size.tiles() as i32;
        GridPoint::new((px / scale) as i32, tiles - 1 - (py / scale) as i32)
    }

    // Seeds the map from fBm noise: low ground becomes water, a band above
    // it dirt.
    fn seed_terrain(&mut self, seed: u32) -> LoamResult<()> {
        let tiles = self.map_size.tiles() as usize;
        let noise = FbmNoise::new(seed, 0.03);
        let map = NoiseMap::sample(&noise, tiles, tiles, 0.0, 1.0)?;
        let canvas = self.shaper.canvas();
        canvas.set_brush_radius(0.0);

        let mut water = Vec::new();
        let mut dirt = Vec::new();
        for row in 0..tiles as i32 {
            for col in 0..tiles as i32 {
                let height = map.normalized(col, row);
                if height < 0.35 {
                    water.push(GridPoint::new(col, row));
                } else if height < 0.45 {
                    dirt.push(GridPoint::new(col, row));
                }
            }
        }
        canvas.set_terrain_type(TerrainType::Water);
        canvas.draw_points(&water);
        canvas.set_terrain_type(TerrainType::Dirt);
        canvas.draw_points(&dirt);
        canvas.set_brush_radius(2.0);
        info!(
            "seeded {} water and {} dirt tiles from seed {}",
            water.len(),
            dirt.len(),
            seed
        );
        Ok(())
    }

    fn submit_path(&mut self, start: GridPoint, stop: GridPoint) {
        let area = Arc::new(TerrainArea::snapshot(&mut self.shaper));
        let request = PathRequest::new(start, stop);
        info!("path request {} -> {}", start, stop);
        self.ticket = Some(self.service.submit(request, area));
    }
}

impl Application for TerrainDemo {
    fn on_start(&mut self) -> LoamResult<()> {
        // fully qualified: the macroquad prelude globs its own `rand` module
        let seed = self.args.seed.unwrap_or_else(::rand::random);
        self.seed_terrain(seed)
    }

    fn input(&mut self, keyboard: &Keyboard, mouse: &Mouse, _delta: f32) -> LoamResult<()> {
        if keyboard.just_pressed(KeyCode::Escape) {
            self.quit = true;
            return Ok(());
        }
        for (key, layer) in [
            (KeyCode::Key1, TerrainType::Primary),
            (KeyCode::Key2, TerrainType::Secondary),
            (KeyCode::Key3, TerrainType::Dirt),
            (KeyCode::Key4, TerrainType::Water),
            (KeyCode::Key5, TerrainType::Road),
        ] {
            if keyboard.just_pressed(key) {
                self.layer = layer;
                info!("painting {}", layer.channel());
            }
        }
        if keyboard.just_pressed(KeyCode::C) {
            self.clearing = !self.clearing;
        }

        let (px, py) = mouse.position();
        let tile = self.tile_at(px, py);
        if mouse.pressed(MouseButton::Left) {
            let layer = self.layer;
            let clearing = self.clearing;
            let stroke_from = self.stroke_from;
            let canvas = self.shaper.canvas();
            canvas.set_terrain_type(layer);
            canvas.set_clear_mode(clearing);
            match stroke_from {
                Some(from) if from != tile => canvas.draw_line(from.x, from.y, tile.x, tile.y),
                None => canvas.draw_point(tile.x, tile.y),
                _ => {}
            }
            self.stroke_from = Some(tile);
        } else {
            self.stroke_from = None;
        }

        if mouse.just_pressed(MouseButton::Right) {
            match self.path_start.take() {
                Some(start) => self.submit_path(start, tile),
                None => self.path_start = Some(tile),
            }
        }
        Ok(())
    }

    fn update(&mut self, _delta: f32) -> LoamResult<()> {
        self.shaper.update();
        if let Some(ticket) = &self.ticket {
            if let Some(result) = ticket.poll() {
                if result.is_found() {
                    info!("path found, {} points", result.len());
                    self.path = result.path().to_vec();
                } else {
                    info!("no path");
                    self.path.clear();
                }
                self.ticket = None;
            }
        }
        Ok(())
    }

    fn render(&mut self, _alpha: f32, _frame_time: f32) -> LoamResult<()> {
        clear_background(Color::from_rgba(40, 60, 35, 255));
        let scale = self.tile_px();
        let tiles = self.map_size.tiles() as f32;
        let side = scale * tiles;

        let texture = self.shaper.upload_blend_map().clone();
        draw_texture_ex(
            &texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(side, side)),
                flip_y: true,
                ..Default::default()
            },
        );

        // chunk outlines over the map
        self.quad_tree.query((0.0, 0.0), (tiles, tiles), |leaf| {
            let x = leaf.x as f32 * leaf.size * scale;
            let y = side - (leaf.y as f32 + 1.0) * leaf.size * scale;
            let px = leaf.size * scale;
            draw_rectangle_lines(x, y, px, px, 1.0, Color::from_rgba(255, 255, 255, 40));
        });

        for p in &self.path {
            let x = p.x as f32 * scale;
            let y = side - (p.y as f32 + 1.0) * scale;
            draw_rectangle(x, y, scale, scale, Color::from_rgba(255, 220, 60, 180));
        }
        if let Some(start) = self.path_start {
            let x = start.x as f32 * scale;
            let y = side - (start.y as f32 + 1.0) * scale;
            draw_rectangle_lines(x, y, scale, scale, 2.0, RED);
        }

        let mode = if self.clearing { "clear" } else { "paint" };
        draw_text(
            &format!(
                "{} {} | 1-5 layer, C mode, RMB path, ESC quit",
                mode,
                self.layer.channel()
            ),
            8.0,
            20.0,
            24.0,
            WHITE,
        );
        Ok(())
    }

    fn on_exit(&mut self) {
        info!("demo closed");
    }

    fn finished(&self) -> bool {
        self.quit
    }
}

fn window_conf() -> Conf {
    WindowConfig {
        title: "Loam Terrain Demo".to_string(),
        ..Default::default()
    }
    .into()
}

fn init_logging(level: &str) {
    #[cfg(feature = "dev-tools")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .with_target(false)
        .init();

    #[cfg(not(feature = "dev-tools"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

#[macroquad::main(window_conf)]
async fn main() -> LoamResult<()> {
    let args = Args::parse();
    init_logging(&args.log_level);
    info!("loam v{}", loam::VERSION);

    let mut demo = TerrainDemo::new(args)?;
    Engine::new().run(&mut demo).await
}
