//! Integration tests equipping an application with a test controller.

use willow::prelude::*;

struct TestApp;

impl Controller for TestApp {
	fn routes() -> Result<RouteCollection> {
		Ok(Self::collection()
			.get("home", "/")?
			.handler("index")
			.get("test1", "/test1")?
			.handler("test1")
			.get("params", "/params/@id")?
			.handler("params")
			.build())
	}
}

#[derive(Default)]
struct RecordingEngine {
	rules: Vec<String>,
}

impl DispatchEngine for RecordingEngine {
	fn register(&mut self, registration: RouteRegistration) -> Result<()> {
		self.rules.push(registration.rule());
		Ok(())
	}
}

fn equip() -> Result<App> {
	let settings = Settings::default().with_mode(Mode::Test);
	App::equip(settings, vec![TestApp::routes()?])
}

#[test]
fn test_mode() -> Result<()> {
	let app = equip()?;
	assert!(app.settings().is_test());
	assert!(!app.settings().is_deployed());
	assert!(!app.settings().is_dev());
	assert!(!app.settings().is_prod());
	Ok(())
}

#[test]
fn test_router() -> Result<()> {
	let app = equip()?;
	let router = app.router();

	assert_eq!(router.routes().len(), 3);
	assert_eq!(router.routes_for(TestApp::name()).len(), 3);

	let route = router.route("home").expect("home route registered");
	assert_eq!(route.method().as_str(), "GET");
	assert_eq!(
		route.handler().unwrap().token(),
		Some(format!("{}->index", TestApp::name()).as_str())
	);

	assert!(router.route("nope").is_none());
	Ok(())
}

#[test]
fn test_install_registers_every_route() -> Result<()> {
	let app = equip()?;
	let mut engine = RecordingEngine::default();
	app.install(&mut engine)?;

	assert_eq!(
		engine.rules,
		[
			"GET @home: /",
			"GET @test1: /test1",
			"GET @params: /params/@id",
		]
	);
	Ok(())
}

#[test]
fn test_duplicate_route_across_controllers_aborts_equip() -> Result<()> {
	struct OtherApp;

	impl Controller for OtherApp {
		fn routes() -> Result<RouteCollection> {
			Ok(Self::collection()
				.get("home", "/other")?
				.handler("index")
				.build())
		}
	}

	let result = App::equip(
		Settings::default(),
		vec![TestApp::routes()?, OtherApp::routes()?],
	);
	assert!(matches!(result, Err(Error::DuplicateRouteName { .. })));
	Ok(())
}

#[tokio::test]
async fn test_callback_route_is_invocable_from_registration() -> Result<()> {
	async fn health(_request: Request) -> Result<Response> {
		Ok(Response::ok().with_body("ok"))
	}

	let collection = RouteCollection::create("app::Health")
		.get("health", "/health")?
		.callback(FnHandler::new(health))
		.build();
	let app = App::equip(Settings::default(), vec![collection])?;

	let registration = app.router().registrations().next().unwrap();
	let handler = registration.handler.callback().expect("callback reference");
	let response = handler
		.handle(Request::new(http::Method::GET, "/health"))
		.await?;
	assert_eq!(response.body.as_ref(), b"ok");
	Ok(())
}

#[test]
fn test_router_handle_is_shareable() -> Result<()> {
	let app = equip()?;
	let handle = app.router_handle();

	let worker = std::thread::spawn(move || handle.route("test1").map(|r| r.name().to_string()));
	assert_eq!(worker.join().unwrap().as_deref(), Some("test1"));
	Ok(())
}
