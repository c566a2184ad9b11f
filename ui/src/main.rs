mod canvas;

use std::rc::Rc;

use slope_common::{CoordinateMapper, DragUpdate, Feedback, LineWidget, Pixel};
use web_sys::{HtmlCanvasElement, HtmlInputElement, PointerEvent};
use yew::prelude::*;

enum WidgetAction {
    PointerDown(Pixel),
    PointerMove(Pixel),
    PointerUp,
    PointerLeave,
    SetEquation(String),
    SetIntercept(String),
    Check,
    NewProblem,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct WidgetState(LineWidget);

impl Reducible for WidgetState {
    type Action = WidgetAction;

    fn reduce(self: Rc<Self>, action: WidgetAction) -> Rc<Self> {
        let mut widget = self.0.clone();
        match action {
            WidgetAction::PointerDown(pointer) => {
                widget.pointer_down(pointer);
            }
            WidgetAction::PointerMove(pointer) => {
                if widget.pointer_move(pointer) == DragUpdate::Rejected {
                    gloo::console::debug!("drag onto the origin ignored");
                }
            }
            WidgetAction::PointerUp => widget.pointer_up(),
            WidgetAction::PointerLeave => widget.pointer_leave(),
            WidgetAction::SetEquation(text) => widget.set_equation(text),
            WidgetAction::SetIntercept(text) => widget.set_intercept(text),
            WidgetAction::Check => {
                let feedback = widget.check();
                gloo::console::debug!(format!("answer checked: {}", feedback.verdict.class()));
            }
            WidgetAction::NewProblem => {
                let point = widget.new_problem(&mut rand::thread_rng());
                gloo::console::debug!(format!("new problem at ({}, {})", point.x(), point.y()));
            }
        }
        Rc::new(Self(widget))
    }
}

fn pointer_pixel(canvas_ref: &NodeRef, event: &PointerEvent) -> Option<Pixel> {
    let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
    let rect = canvas.get_bounding_client_rect();
    Some(Pixel::new(
        f64::from(event.client_x()) - rect.left(),
        f64::from(event.client_y()) - rect.top(),
    ))
}

#[derive(Properties, PartialEq)]
struct GraphProps {
    widget: UseReducerHandle<WidgetState>,
}

#[function_component(Graph)]
fn graph(GraphProps { widget }: &GraphProps) -> Html {

    let canvas_ref = use_node_ref();
    {
        let canvas_ref = canvas_ref.clone();
        let scene = widget.0.scene();
        use_effect_with(widget.0.point(), move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                if let Err(err) = canvas::paint(&canvas, &scene) {
                    gloo::console::error!(format!("could not draw graph: {err}"));
                }
            }
            || ()
        });
    }

    let on_pointer = |to_action: fn(Pixel) -> WidgetAction| {
        let widget = widget.clone();
        let canvas_ref = canvas_ref.clone();
        Callback::from(move |event: PointerEvent| {
            if let Some(pointer) = pointer_pixel(&canvas_ref, &event) {
                widget.dispatch(to_action(pointer));
            }
        })
    };
    let onpointerdown = on_pointer(WidgetAction::PointerDown);
    let onpointermove = on_pointer(WidgetAction::PointerMove);
    let onpointerup = {
        let widget = widget.clone();
        Callback::from(move |_: PointerEvent| widget.dispatch(WidgetAction::PointerUp))
    };
    let onpointerleave = {
        let widget = widget.clone();
        Callback::from(move |_: PointerEvent| widget.dispatch(WidgetAction::PointerLeave))
    };

    let size = CoordinateMapper::CANVAS_SIZE.to_string();
    html! {
        <canvas id="graph" ref={canvas_ref} width={size.clone()} height={size}
            style="touch-action: none"
            {onpointerdown} {onpointermove} {onpointerup} {onpointerleave} />
    }
}

#[derive(Properties, PartialEq)]
struct AnswerFieldsProps {
    widget: UseReducerHandle<WidgetState>,
}

fn bind(widget: &UseReducerHandle<WidgetState>, to_action: fn(String) -> WidgetAction) -> Callback<InputEvent> {
    let widget = widget.clone();
    Callback::from(move |event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        widget.dispatch(to_action(input.value()));
    })
}

#[function_component(AnswerFields)]
fn answer_fields(AnswerFieldsProps { widget }: &AnswerFieldsProps) -> Html {

    let form = widget.0.form();
    let on_check = {
        let widget = widget.clone();
        Callback::from(move |_: MouseEvent| widget.dispatch(WidgetAction::Check))
    };
    let on_new_problem = {
        let widget = widget.clone();
        Callback::from(move |_: MouseEvent| widget.dispatch(WidgetAction::NewProblem))
    };

    html! {
        <>
            <div class="input-row">
                <label>{ "Enter the equation of the line (y = mx + b): " }</label>
                <input id="eqn" type="text" placeholder="y = mx + b"
                    value={form.equation().to_string()}
                    oninput={bind(widget, WidgetAction::SetEquation)} />
            </div>
            <div class="input-row">
                <label>{ "What is the value of b? " }</label>
                <input id="bval" type="text" placeholder="b"
                    value={form.intercept().to_string()}
                    oninput={bind(widget, WidgetAction::SetIntercept)} />
            </div>
            <button onclick={on_check}>{ "Check Answer" }</button>
            <button onclick={on_new_problem}>{ "New Problem" }</button>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct FeedbackPanelProps {
    feedback: Option<Feedback>,
}

#[function_component(FeedbackPanel)]
fn feedback_panel(FeedbackPanelProps { feedback }: &FeedbackPanelProps) -> Html {

    html! {
        <div id="feedback">
        {
            for feedback.iter().map(|feedback| html! {
                <div class={feedback.verdict.class()}>
                    { for feedback.lines.iter().map(|line| html! { <>{ line }<br /></> }) }
                </div>
            })
        }
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {

    let widget = use_reducer_eq(WidgetState::default);
    let feedback = widget.0.form().feedback().cloned();

    html! {
        <>
            <h2>{ "Slope-Intercept Practice" }</h2>
            <p>{ "Drag the blue point to a new location. The line will always go through the origin (0,0) and the blue point." }</p>
            <Graph widget={widget.clone()} />
            <AnswerFields widget={widget.clone()} />
            <FeedbackPanel {feedback} />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
