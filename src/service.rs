//! Request dispatch — the service behind the message protocol.
//!
//! One [`Scanner`] owns the capture service, the decode adapter, and at
//! most one live selector session. Every protocol request maps to one
//! handler; every failure is converted to an error response at this
//! boundary, so nothing below it can take the process down.

use crate::capture::{CaptureService, MonitorSource};
use crate::decode::{DecodeError, DecodeLadder, Detector, RxingDecoder};
use crate::geometry::Point;
use crate::protocol::{DataUrl, Request, Response};
use crate::clipboard;
use crate::selection::{GestureEvent, LoggingOverlay, RegionSelector, SelectorUpdate};

pub struct Scanner {
    capture: CaptureService,
    detector: Detector,
    session: Option<RegionSelector<LoggingOverlay>>,
    copy_to_clipboard: bool,
}

impl Scanner {
    pub fn new(capture: CaptureService, detector: Detector, copy_to_clipboard: bool) -> Self {
        Self {
            capture,
            detector,
            session: None,
            copy_to_clipboard,
        }
    }

    /// Production wiring: primary-monitor capture and the rxing decoder
    /// with the default retry ladder.
    pub fn with_defaults(copy_to_clipboard: bool) -> Result<Self, DecodeError> {
        let capture = CaptureService::new(Box::new(MonitorSource));
        let detector = Detector::new(Box::new(RxingDecoder::new()), DecodeLadder::default())?;
        Ok(Self::new(capture, detector, copy_to_clipboard))
    }

    /// Handle one request, producing exactly one response. The pointer-up
    /// that completes a selection is the flow's single suspension point:
    /// its response carries the scan result.
    pub async fn handle(&mut self, request: Request) -> Response {
        match request {
            Request::StartCrop => self.start_crop(),
            Request::CaptureVisibleTab => self.capture_to_response(None),
            Request::CaptureScreenshot { rect } => self.capture_to_response(Some(rect)),
            Request::DetectBarcode { image_data } => self.detect(&image_data),

            Request::PointerDown { x, y } => {
                self.relay(GestureEvent::PointerDown(Point::new(x, y)))
            }
            Request::PointerMove { x, y } => {
                self.relay(GestureEvent::PointerMove(Point::new(x, y)))
            }
            Request::PointerUp { x, y } => self.relay(GestureEvent::PointerUp(Point::new(x, y))),
            Request::KeyDown { key } => {
                if key == "Escape" {
                    self.relay(GestureEvent::Escape)
                } else {
                    Response::ok()
                }
            }
        }
    }

    fn start_crop(&mut self) -> Response {
        if self.session.as_ref().is_some_and(|s| s.is_active()) {
            return Response::error("A selection is already in progress");
        }

        match RegionSelector::activate(LoggingOverlay::new()) {
            Ok(selector) => {
                self.session = Some(selector);
                Response::ok()
            }
            Err(e) => Response::error(e.to_string()),
        }
    }

    fn capture_to_response(&self, rect: Option<crate::geometry::Rect>) -> Response {
        match self.capture.capture(rect.as_ref()) {
            Ok(png_bytes) => Response::with_data_url(DataUrl::from_png_bytes(&png_bytes)),
            Err(e) => Response::error(e.to_string()),
        }
    }

    fn detect(&self, image_data: &DataUrl) -> Response {
        let image = match image_data.decode_image() {
            Ok(image) => image,
            Err(e) => return Response::error(e.to_string()),
        };
        match self.detector.detect(&image) {
            Ok(outcome) => Response::with_result(outcome),
            Err(e) => Response::error(e.to_string()),
        }
    }

    fn relay(&mut self, event: GestureEvent) -> Response {
        let Some(session) = self.session.as_mut() else {
            // No selection in progress; input relays are inert, exactly
            // like pointer events with the content overlay gone.
            return Response::ok();
        };

        match session.handle_event(event, &self.capture, &self.detector) {
            SelectorUpdate::Pending => Response::ok(),
            SelectorUpdate::Cancelled => {
                self.session = None;
                Response::ok()
            }
            SelectorUpdate::Finished(Ok(outcome)) => {
                self.session = None;
                if self.copy_to_clipboard {
                    clipboard::copy_code(&outcome.code);
                }
                Response::with_result(outcome)
            }
            SelectorUpdate::Finished(Err(e)) => {
                self.session = None;
                Response::error(e.to_string())
            }
        }
    }
}
