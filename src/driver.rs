// Single-threaded event loop connecting a `BoardController` to a `GameStateProvider`.
//
// Each click and each completed remote call is handled to completion before the next one is
// looked at. Remote calls do not block clicks: any number of them can be in flight, and they
// are applied in completion order, which is not necessarily the order they were issued in.

use std::pin::pin;
use std::sync::mpsc;

use futures_util::stream::{FusedStream, FuturesUnordered};
use futures_util::{Stream, StreamExt, select};
use log::debug;

use crate::controller::BoardController;
use crate::display::PixelPoint;
use crate::event::ProviderRequest;
use crate::remote::{GameStateProvider, execute};
use crate::surface::Surface;


// Runs until `clicks` is exhausted and every remote call has been answered. Does not call
// `start`: hosts decide when the first board fetch happens.
pub async fn run_board_loop<S, P>(
    controller: &mut BoardController<S>, requests_rx: &mpsc::Receiver<ProviderRequest>,
    provider: &P, clicks: impl Stream<Item = PixelPoint>,
) where
    S: Surface,
    P: GameStateProvider + ?Sized,
{
    let mut clicks = pin!(clicks.fuse());
    let mut in_flight = FuturesUnordered::new();
    loop {
        in_flight.extend(requests_rx.try_iter().map(|request| execute(provider, request)));
        if clicks.is_terminated() && in_flight.is_empty() {
            break;
        }
        select! {
            response = in_flight.select_next_some() => controller.process_response(response),
            click = clicks.next() => match click {
                Some(p) => controller.on_click(p),
                None => debug!("Click stream is over, waiting for remote calls to finish"),
            },
        }
    }
}
