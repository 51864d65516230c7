//! Integration test: drive a full submission through the public API with
//! an in-memory decoration service, image loader and surfaces.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::{Cell, RefCell};

use bloomline_shapes::{
    BusyGuard, ClientConfig, Decorate, DecorateError, DecorationRequest, DecorationResponse,
    FormSnapshot, ImageLoadError, ImageLoader, Phase, Renderer, ShapeId, Surface,
    interpret_response, submit,
};
use futures::executor::block_on;
use serde_json::{Value, json};

/// Service stand-in: records the request body, answers with a fixed
/// status and body through the same interpretation the HTTP client uses.
struct CannedService {
    status: u16,
    body: String,
    seen: RefCell<Vec<Value>>,
}

impl CannedService {
    fn new(status: u16, body: &Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl Decorate for CannedService {
    async fn decorate(
        &self,
        request: &DecorationRequest,
    ) -> Result<DecorationResponse, DecorateError> {
        self.seen
            .borrow_mut()
            .push(serde_json::to_value(request).unwrap());
        interpret_response(self.status, &self.body)
    }
}

/// Loader whose images are their own source strings; `/images/404` fails.
struct Images;

impl ImageLoader for Images {
    type Image = String;

    async fn load(&self, src: &str) -> Result<String, ImageLoadError> {
        if src.ends_with("/404") {
            return Err(ImageLoadError {
                src: src.to_owned(),
                reason: "404".into(),
            });
        }
        Ok(src.to_owned())
    }

    fn fallback(&self) -> String {
        "red-circle".into()
    }
}

/// Surface that just lists what was drawn, with its transform.
#[derive(Default)]
struct Canvas {
    cleared: usize,
    depth: usize,
    origin: (f64, f64),
    angle: f64,
    drawn: Vec<(String, (f64, f64), f64)>,
}

impl Surface for Canvas {
    type Image = String;
    type Error = std::convert::Infallible;

    fn clear(&mut self) {
        self.cleared += 1;
    }
    fn save(&mut self) {
        self.depth += 1;
    }
    fn restore(&mut self) {
        self.depth -= 1;
        self.origin = (0.0, 0.0);
        self.angle = 0.0;
    }
    fn translate(&mut self, x: f64, y: f64) -> Result<(), Self::Error> {
        self.origin = (self.origin.0 + x, self.origin.1 + y);
        Ok(())
    }
    fn rotate(&mut self, angle: f64) -> Result<(), Self::Error> {
        self.angle += angle;
        Ok(())
    }
    fn draw_image(&mut self, image: &String, x: f64, y: f64) -> Result<(), Self::Error> {
        self.drawn.push((image.clone(), (x, y), self.angle));
        Ok(())
    }
    fn draw_image_in(
        &mut self,
        image: &String,
        _x: f64,
        _y: f64,
        _width: f64,
        _height: f64,
    ) -> Result<(), Self::Error> {
        self.drawn.push((image.clone(), self.origin, self.angle));
        Ok(())
    }
}

fn response_body() -> Value {
    json!({
        "generatedImage": "data:image/png;base64,iVBORw0KGgo=",
        "flowerPath": [
            {"position": {"x": 550.0, "y": 300.0}, "angle": 0.0, "image_id": "12", "category": "77"},
            {"position": {"x": 400.0, "y": 150.0}, "angle": 1.5, "image_id": "404", "category": "77"},
            {"position": {"x": 250.0, "y": 300.0}, "angle": 3.0, "image_id": "7"}
        ]
    })
}

#[test]
fn circle_at_density_50_round_trip() {
    let config = ClientConfig::default();
    let renderer = Renderer::new(&Images, &config);
    let service = CannedService::new(200, &response_body());
    let snapshot = FormSnapshot {
        shape: ShapeId::Circle,
        custom_text: String::new(),
        density: 50,
    };
    let (mut base, mut overlay) = (Canvas::default(), Canvas::default());

    block_on(submit(&snapshot, &service, &renderer, &mut base, &mut overlay)).unwrap();

    assert_eq!(
        service.seen.borrow().as_slice(),
        [json!({
            "type": "circle",
            "center": [400, 300],
            "radius": 150,
            "density": 50,
            "category": "77"
        })]
    );

    assert_eq!(base.cleared, 1);
    assert_eq!(
        base.drawn,
        vec![(
            "data:image/png;base64,iVBORw0KGgo=".to_owned(),
            (0.0, 0.0),
            0.0
        )]
    );

    assert_eq!(overlay.cleared, 1);
    assert_eq!(overlay.depth, 0, "every save is matched by a restore");
    assert_eq!(
        overlay.drawn,
        vec![
            ("/images/12".to_owned(), (550.0, 300.0), 0.0),
            ("red-circle".to_owned(), (400.0, 150.0), 1.5),
            ("/images/7".to_owned(), (250.0, 300.0), 3.0),
        ]
    );
}

#[test]
fn custom_triangle_is_forwarded() {
    let config = ClientConfig::default();
    let renderer = Renderer::new(&Images, &config);
    let service = CannedService::new(200, &json!({"generatedImage": "data:,", "flowerPath": []}));
    let snapshot = FormSnapshot {
        shape: ShapeId::Custom,
        custom_text: r#"{"type":"2d","points":[[100,100],[200,100],[150,50]]}"#.into(),
        density: 10,
    };
    let (mut base, mut overlay) = (Canvas::default(), Canvas::default());

    block_on(submit(&snapshot, &service, &renderer, &mut base, &mut overlay)).unwrap();

    assert_eq!(
        service.seen.borrow()[0],
        json!({
            "type": "2d",
            "points": [[100, 100], [200, 100], [150, 50]],
            "density": 10,
            "category": "77"
        })
    );
    assert!(overlay.drawn.is_empty());
}

#[test]
fn server_error_surfaces_body_and_leaves_canvases_alone() {
    let config = ClientConfig::default();
    let renderer = Renderer::new(&Images, &config);
    let mut service = CannedService::new(500, &Value::Null);
    service.body = "server overload".into();
    let snapshot = FormSnapshot {
        shape: ShapeId::Hexagon,
        custom_text: String::new(),
        density: 20,
    };
    let (mut base, mut overlay) = (Canvas::default(), Canvas::default());

    let err = block_on(submit(&snapshot, &service, &renderer, &mut base, &mut overlay))
        .unwrap_err();

    assert_eq!(err.to_string(), "server overload");
    assert_eq!(base.cleared + overlay.cleared, 0);
}

#[test]
fn busy_guard_serializes_submissions() {
    let mut phase = Cell::new(Phase::Idle);
    let guard = BusyGuard::acquire(&mut phase).expect("idle phase accepts a submission");
    drop(guard);
    assert_eq!(phase.get(), Phase::Idle);

    let mut busy = Cell::new(Phase::Submitting);
    assert!(BusyGuard::acquire(&mut busy).is_none());
}
