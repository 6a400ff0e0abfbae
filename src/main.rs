use std::path::{Path, PathBuf};

use ansi_term::Style;
use color_eyre::eyre::{eyre, Result};
use structopt::StructOpt;

use frets::chords::Chord;
use frets::colors::{CYAN, GREEN, RED, WHITE};
use frets::fretboard::data::Orientation;
use frets::notes::data::{Key, NoteName};
use frets::notes::pretty::{prettify_chord, prettify_interval, prettify_key, prettify_note};
use frets::notes::signature::{MAJOR_KEYS, MINOR_KEYS};
use frets::roman::chord_name_from_roman;
use frets::{Diagram, MidiOptions, RenderOptions};

#[derive(Debug, StructOpt)]
#[structopt(name = "frets", about = "Scales, chords and songs on the guitar fretboard.")]
struct FretsOptions {
    #[structopt(long = "note-names", help = "Label the fretboard with note names.")]
    note_names: bool,

    #[structopt(long = "portrait", help = "Draw the fretboard with the nut at the top.")]
    portrait: bool,

    #[structopt(long = "pdf", help = "Also write diagrams as PDF.")]
    pdf: bool,

    #[structopt(
        short = "d",
        long = "output-dir",
        help = "Directory for diagrams and MIDI files. Defaults to `FRETS_OUTPUT_DIR`, or the current directory.",
        parse(from_os_str)
    )]
    output_dir: Option<PathBuf>,

    #[structopt(subcommand)]
    command: FretsCommand,
}

#[derive(Debug, StructOpt)]
enum FretsCommand {
    #[structopt(name = "scale", about = "Draw the scale of a key, e.g. `Eb` or `f#`.")]
    Scale {
        key: String,

        #[structopt(long = "pentatonic", help = "Only the five notes of the pentatonic scale.")]
        pentatonic: bool,
    },

    #[structopt(name = "chord", about = "Draw a chord, e.g. `Cmaj7` or `D/F#`.")]
    Chord { chord: String },

    #[structopt(name = "keys", about = "List the scale of every key.")]
    Keys {
        #[structopt(long = "minor")]
        minor: bool,
    },

    #[structopt(name = "chords", about = "List the diatonic chords of every key.")]
    Chords {
        #[structopt(long = "minor")]
        minor: bool,
    },

    #[structopt(name = "song", about = "Compile a song to a MIDI file.")]
    Song {
        name: String,

        #[structopt(short = "r", long = "repeat", default_value = "1")]
        repeat: usize,

        #[structopt(
            short = "o",
            long = "output",
            help = "Output file. Defaults to `NAME.mid` in the output directory.",
            parse(from_os_str)
        )]
        output: Option<PathBuf>,
    },

    #[structopt(
        name = "play",
        about = "Compile and play a song as MIDI. Uses `timidity` by default.\n\
                 You can change this with the `FRETS_MIDI_PLAYER` environment variable."
    )]
    Play {
        name: String,

        #[structopt(short = "r", long = "repeat", default_value = "1")]
        repeat: usize,
    },
}

fn main() {
    let options = FretsOptions::from_args();

    if let Err(err) = color_eyre::install().and_then(|()| run_command(options)) {
        eprintln!("{:?}", err);
        log(RED, "error:", "Command failed.");
        std::process::exit(1)
    }
}

fn log(color: Style, prefix: &str, message: &str) {
    eprintln!("{} {}", color.paint(prefix), WHITE.paint(message));
}

fn output_dir(option: Option<PathBuf>) -> PathBuf {
    option
        .or_else(|| std::env::var_os("FRETS_OUTPUT_DIR").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn run_command(options: FretsOptions) -> Result<()> {
    let render = RenderOptions {
        orientation: if options.portrait {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        },
        note_names: options.note_names,
    };
    let output_dir = output_dir(options.output_dir);

    match options.command {
        FretsCommand::Scale { key, pentatonic } => {
            let diagram = frets::scale_diagram(&key, pentatonic, &render)?;
            write_diagram(&diagram, &render, &output_dir, options.pdf)
        }

        FretsCommand::Chord { chord } => {
            let diagram = frets::chord_diagram(&chord, &render)?;
            write_diagram(&diagram, &render, &output_dir, options.pdf)
        }

        FretsCommand::Keys { minor } => {
            for key in if minor { &MINOR_KEYS } else { &MAJOR_KEYS } {
                let names = frets::notes::key_name_to_note_names(key)?;
                println!("{:<8} : {}", prettify_key(&key.parse()?), pretty_notes(&names));
            }
            Ok(())
        }

        FretsCommand::Chords { minor } => {
            for key in if minor { &MINOR_KEYS } else { &MAJOR_KEYS } {
                let parsed: Key = key.parse()?;
                let chords = parsed
                    .mode
                    .romans()
                    .iter()
                    .map(|&roman| -> Result<_> {
                        let chord = chord_name_from_roman(roman, key)?;
                        let notes = chord.note_names()?;
                        Ok((roman, chord, notes))
                    })
                    .collect::<Result<Vec<_>>>()?;
                print_key_chords(&parsed, &chords);
            }
            Ok(())
        }

        FretsCommand::Song {
            name,
            repeat,
            output,
        } => {
            let midi = compile_song(&name, repeat)?;
            let output = output.unwrap_or_else(|| output_dir.join(format!("{}.mid", name)));
            write_binary(&midi, &output)
        }

        FretsCommand::Play { name, repeat } => play_song(&name, repeat),
    }
}

fn pretty_notes(notes: &[NoteName]) -> String {
    notes
        .iter()
        .map(|note| format!("{:<2}", prettify_note(note)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_key_chords(key: &Key, chords: &[(&str, Chord, Vec<NoteName>)]) {
    println!("== {} key ==", prettify_key(key));
    for (roman, chord, notes) in chords {
        println!(
            "{:<5} {:<4} : {}",
            roman,
            prettify_chord(&chord.to_string()),
            pretty_notes(notes)
        );
    }
}

fn write_diagram(diagram: &Diagram, render: &RenderOptions, output_dir: &Path, pdf: bool) -> Result<()> {
    for label in &diagram.labels {
        println!("{} = {}", prettify_interval(&label.function), prettify_note(&label.name));
    }
    println!("{}", diagram.fretboard.dump_ansi(render.orientation));

    std::fs::create_dir_all(output_dir)?;

    let svg = diagram.fretboard.dump_svg(render.orientation);
    write_binary(svg.as_bytes(), &output_dir.join(format!("{}.svg", diagram.name)))?;

    if pdf {
        let document = diagram.fretboard.dump_pdf(render.orientation);
        write_binary(&document, &output_dir.join(format!("{}.pdf", diagram.name)))?;
    }

    Ok(())
}

fn compile_song(name: &str, repeat: usize) -> Result<Vec<u8>> {
    let song = frets::songs::song(name)?;

    log(CYAN, "Compiling", &format!("{} to MIDI ...", song.name));
    let track = song.render(repeat)?;
    let midi = track.to_midi(&MidiOptions::default())?;

    print_key_chords(&song.key.parse()?, &song.key_chords()?);

    let chords = song
        .chords()?
        .iter()
        .map(|chord| chord.to_string())
        .collect::<Vec<_>>();
    println!("== pattern ==");
    println!("{}", song.romans().join(" "));
    println!("== chords ==");
    println!("{}", chords.join(" "));

    Ok(midi)
}

fn play_song(name: &str, repeat: usize) -> Result<()> {
    use mktemp::Temp;
    use std::process::Command;

    let mid_out = Temp::new_file()?;

    let midi = compile_song(name, repeat)?;
    write_binary(&midi, mid_out.as_ref())?;

    log(CYAN, "Playing", "...");

    let midi_player_command =
        std::env::var_os("FRETS_MIDI_PLAYER").unwrap_or_else(|| "timidity".into());

    let command_output = Command::new(&midi_player_command)
        .arg(mid_out.as_ref().as_os_str())
        .output();

    let command_output = match command_output {
        Ok(x) => x,
        Err(e) => {
            log(
                RED,
                "error:",
                &format!(
                    "Failed to run external command {:?}.\n\
                     You can change the command used to play MIDI files by setting \
                     the `FRETS_MIDI_PLAYER` environment variable.",
                    midi_player_command
                ),
            );
            return Err(e.into());
        }
    };

    if !command_output.status.success() {
        use std::io::Write;

        std::io::stderr().write_all(&command_output.stderr)?;
        return Err(eyre!("Compile and play failed."));
    }

    log(GREEN, "Finished", name);

    Ok(())
}

fn write_binary(content: &[u8], output: &Path) -> Result<()> {
    use std::fs::File;
    use std::io::Write;

    log(CYAN, "Writing", &output.display().to_string());
    File::create(output)?.write_all(content)?;

    Ok(())
}
