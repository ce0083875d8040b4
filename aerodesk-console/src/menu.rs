use aerodesk_core::{FareClass, Inventory};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const RULE: &str = "-----------------------------------------------";

/// Map the operator's class code (1, 2, 3) to a fare class.
pub fn fare_class_from_code(code: &str) -> Option<FareClass> {
    match code.trim() {
        "1" => Some(FareClass::Economy),
        "2" => Some(FareClass::Business),
        "3" => Some(FareClass::First),
        _ => None,
    }
}

/// Interactive booking menu over whitespace-separated input tokens.
pub struct Menu<R, W> {
    inventory: Inventory,
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(inventory: Inventory, input: R, output: W) -> Self {
        Self {
            inventory,
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn into_parts(self) -> (Inventory, W) {
        (self.inventory, self.output)
    }

    /// Run until the operator picks Exit or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.next_token()? else {
                debug!("Input closed, leaving menu");
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.display_flights()?,
                "2" => self.book()?,
                "3" => self.cancel()?,
                "4" => self.show_seat_map()?,
                "5" => {
                    writeln!(self.output, "Exiting... Thank you for using the Aerodesk Flight Booking System!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice! Please try again.")?,
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nFlight Booking System Menu:")?;
        writeln!(self.output, "1. Display available flights")?;
        writeln!(self.output, "2. Book ticket")?;
        writeln!(self.output, "3. Cancel ticket")?;
        writeln!(self.output, "4. Show seat map")?;
        writeln!(self.output, "5. Exit")?;
        self.prompt("Enter your choice: ")
    }

    fn display_flights(&mut self) -> io::Result<()> {
        writeln!(self.output, "Available Flights:")?;
        for summary in self.inventory.list_flights() {
            writeln!(
                self.output,
                "Flight {}: {} to {}",
                summary.number, summary.origin, summary.destination
            )?;
            for class in FareClass::ALL {
                writeln!(
                    self.output,
                    "{} Class: {} seats available",
                    class,
                    summary.available.get(class)
                )?;
            }
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn book(&mut self) -> io::Result<()> {
        let Some(number) = self.ask_flight_number()? else { return Ok(()) };
        let Some(class) = self.ask_fare_class()? else { return Ok(()) };

        self.prompt("Enter number of passengers: ")?;
        let Some(count) = self.next_token()? else { return Ok(()) };
        let Ok(count) = count.parse::<usize>() else {
            return writeln!(self.output, "Invalid number of passengers!");
        };

        for _ in 0..count {
            self.prompt("Enter passenger name: ")?;
            let Some(name) = self.next_token()? else { return Ok(()) };
            self.prompt("Enter seat number: ")?;
            let Some(seat) = self.next_token()? else { return Ok(()) };
            let Ok(seat_number) = seat.parse::<u32>() else {
                writeln!(self.output, "Invalid seat number!")?;
                continue;
            };

            match self.inventory.book_ticket(&number, class, &name, seat_number) {
                Ok(()) => {
                    info!("Seat {} booked on {} ({})", seat_number, number, class);
                    writeln!(
                        self.output,
                        "Ticket booked successfully for {} in seat {}.",
                        name, seat_number
                    )?;
                }
                Err(e) => writeln!(self.output, "Failed to book ticket for {}: {}.", name, e)?,
            }
        }
        Ok(())
    }

    fn cancel(&mut self) -> io::Result<()> {
        let Some(number) = self.ask_flight_number()? else { return Ok(()) };
        let Some(class) = self.ask_fare_class()? else { return Ok(()) };

        self.prompt("Enter seat number to cancel: ")?;
        let Some(seat) = self.next_token()? else { return Ok(()) };
        let Ok(seat_number) = seat.parse::<u32>() else {
            return writeln!(self.output, "Invalid seat number!");
        };

        match self.inventory.cancel_ticket(&number, class, seat_number) {
            Ok(()) => {
                info!("Seat {} cancelled on {} ({})", seat_number, number, class);
                writeln!(self.output, "Ticket canceled successfully for seat {}.", seat_number)
            }
            Err(e) => writeln!(
                self.output,
                "Failed to cancel ticket for seat {}: {}.",
                seat_number, e
            ),
        }
    }

    fn show_seat_map(&mut self) -> io::Result<()> {
        let Some(number) = self.ask_flight_number()? else { return Ok(()) };
        let Some(class) = self.ask_fare_class()? else { return Ok(()) };

        let Some(flight) = self.inventory.find_flight(&number) else {
            return writeln!(self.output, "Flight {} not found.", number);
        };

        writeln!(
            self.output,
            "Seat Map for Flight {} ({} to {}), {} Class:",
            flight.number(),
            flight.origin(),
            flight.destination(),
            class
        )?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "{:>10}{:>20}", "Seat No.", "Passenger Name")?;
        writeln!(self.output, "{}", RULE)?;
        for entry in flight.seat_map(class) {
            let occupant = entry.occupant.as_deref().unwrap_or("Available");
            writeln!(self.output, "{:>10}{:>20}", entry.seat_number, occupant)?;
        }
        writeln!(self.output, "{}", RULE)
    }

    /// Prompt for a flight number and confirm it exists.
    fn ask_flight_number(&mut self) -> io::Result<Option<String>> {
        self.prompt("Enter flight number: ")?;
        let Some(number) = self.next_token()? else { return Ok(None) };
        if self.inventory.find_flight(&number).is_none() {
            writeln!(self.output, "Flight {} not found.", number)?;
            return Ok(None);
        }
        Ok(Some(number))
    }

    fn ask_fare_class(&mut self) -> io::Result<Option<FareClass>> {
        self.prompt("Enter class (1 - Economy, 2 - Business, 3 - First): ")?;
        let Some(code) = self.next_token()? else { return Ok(None) };
        let class = fare_class_from_code(&code);
        if class.is_none() {
            writeln!(self.output, "Invalid choice!")?;
        }
        Ok(class)
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }
}
