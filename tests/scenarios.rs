use mandelbrot_explorer::{
    config::ConfigError,
    escape,
    pixel::{Complex, Pixel},
    screen,
    viewport::{Pan, Zoom},
    Config, Explorer, Navigation, Palette, Viewport,
};

fn five_by_five() -> Config {
    Config::new(screen::Size::new(5, 5), 140, Viewport::new(0.0, 0.0, 4.0)).unwrap()
}

#[test]
fn centre_of_five_by_five_frame_is_white() {
    let mut explorer = Explorer::new(&five_by_five());
    let pixels = explorer.render();
    let at = 4 * (2 + 2 * 5);
    assert_eq!(&pixels[at..at + 4], &[255, 255, 255, 255]);
}

#[test]
fn corner_of_five_by_five_frame_escapes_immediately() {
    let frame = screen::Size::new(5, 5);
    let viewport = Viewport::INITIAL;
    assert_eq!(
        escape::point_of(Pixel::new(0, 0), &viewport, frame),
        Complex::new(-2.0, 2.0)
    );
    assert_eq!(escape::evaluate(Pixel::new(0, 0), &viewport, frame, 140), 1);

    let gray = Palette::build(140)[1];
    let mut explorer = Explorer::new(&five_by_five());
    assert_eq!(&explorer.render()[0..4], &[gray, gray, gray, 255]);
}

#[test]
fn navigation_round_trips() {
    let mut explorer = Explorer::new(&Config::default());
    let start = explorer.viewport();

    explorer.navigate(Navigation {
        pan: Some(Pan::Right),
        zoom: Some(Zoom::In),
    });
    explorer.navigate(Navigation {
        pan: None,
        zoom: Some(Zoom::Out),
    });
    explorer.navigate(Navigation {
        pan: Some(Pan::Left),
        zoom: None,
    });

    let end = explorer.viewport();
    assert!((end.centre_x - start.centre_x).abs() < 1e-12);
    assert_eq!(end.centre_y, start.centre_y);
    assert!((end.size - start.size).abs() / start.size <= 1e-9);
}

#[test]
fn each_update_produces_a_complete_fresh_frame() {
    let config = Config::new(screen::Size::new(40, 30), 100, Viewport::INITIAL).unwrap();
    let mut explorer = Explorer::new(&config);
    let first = explorer.render().to_vec();

    let zoom_in = Navigation {
        pan: Some(Pan::Up),
        zoom: Some(Zoom::In),
    };
    let second = explorer.update(zoom_in).to_vec();
    assert_eq!(second.len(), 40 * 30 * 4);
    assert_ne!(first, second);

    let mut fresh = Explorer::new(&config);
    fresh.navigate(zoom_in);
    assert_eq!(fresh.render(), &second[..]);
}

#[test]
fn degenerate_configuration_is_rejected() {
    assert_eq!(
        Config::new(screen::Size::new(500, 500), 0, Viewport::INITIAL),
        Err(ConfigError::NoIterations)
    );
    assert!(Config::new(screen::Size::new(0, 0), 140, Viewport::INITIAL).is_err());
    assert!(Config::new(screen::Size::new(5, 5), 140, Viewport::new(0.0, 0.0, -4.0)).is_err());
}
